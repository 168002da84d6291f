//! Render configuration passed explicitly to the generator

use serde::{Deserialize, Serialize};

/// Selectors and timings used when emitting CSS
///
/// Every field has a default, so a partial `[style]` table is enough.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Deserialize, Serialize)]
pub struct StyleConfig {
    /// Selector the custom properties are declared on
    #[serde(default = "default_scope_selector")]
    pub scope_selector: String,
    #[serde(default = "default_page_selector")]
    pub page_selector: String,
    #[serde(default = "default_heading_selector")]
    pub heading_selector: String,
    #[serde(default = "default_widget_selector")]
    pub widget_selector: String,
    /// Length of one glow pulse cycle
    #[serde(default = "default_glow_pulse_ms")]
    pub glow_pulse_ms: u32,
    /// Disable the pulse animation for `prefers-reduced-motion` users
    #[serde(default = "default_true")]
    pub respect_reduced_motion: bool,
}

fn default_scope_selector() -> String {
    ":root".to_string()
}

fn default_page_selector() -> String {
    "body".to_string()
}

fn default_heading_selector() -> String {
    "h1, h2, h3".to_string()
}

fn default_widget_selector() -> String {
    ".widget-item".to_string()
}

fn default_glow_pulse_ms() -> u32 {
    2000
}

fn default_true() -> bool {
    true
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            scope_selector: default_scope_selector(),
            page_selector: default_page_selector(),
            heading_selector: default_heading_selector(),
            widget_selector: default_widget_selector(),
            glow_pulse_ms: default_glow_pulse_ms(),
            respect_reduced_motion: true,
        }
    }
}

impl StyleConfig {
    /// Parse a TOML table holding the style fields.
    pub fn from_toml_str(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }
}
