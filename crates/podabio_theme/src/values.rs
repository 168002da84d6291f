//! Concrete CSS values for one page render

use crate::tokens::{BorderEffect, GlowIntensity};

/// Custom property names consumed by the page templates
pub mod var {
    pub const PAGE_BACKGROUND: &str = "--page-background";
    pub const WIDGET_BACKGROUND: &str = "--widget-background";
    pub const WIDGET_BORDER_COLOR: &str = "--widget-border-color";
    pub const WIDGET_BORDER_WIDTH: &str = "--widget-border-width";
    pub const ACCENT_COLOR: &str = "--accent-color";
    pub const BUTTON_CORNER_RADIUS: &str = "--button-corner-radius";
    pub const WIDGET_SPACING: &str = "--widget-spacing";
    pub const WIDGET_SHADOW: &str = "--widget-shadow";
    pub const WIDGET_GLOW_COLOR: &str = "--widget-glow-color";
    pub const WIDGET_GLOW_BLUR: &str = "--widget-glow-blur";
    pub const WIDGET_GLOW_OPACITY: &str = "--widget-glow-opacity";
    pub const HEADING_FONT_FAMILY: &str = "--heading-font-family";
    pub const BODY_FONT_FAMILY: &str = "--body-font-family";
    pub const HEADING_FONT_SIZE: &str = "--heading-font-size";
    pub const BODY_FONT_SIZE: &str = "--body-font-size";
    pub const HEADING_FONT_COLOR: &str = "--heading-font-color";
    pub const BODY_FONT_COLOR: &str = "--body-font-color";
}

/// Flat, fully populated style values
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleValues {
    pub page_background: String,
    pub widget_background: String,
    pub widget_border_color: String,
    pub widget_border_width: String,
    pub accent_color: String,
    pub corner_radius: String,
    pub widget_spacing: String,
    pub widget_shadow: String,
    pub border_effect: BorderEffect,
    pub glow_intensity: GlowIntensity,
    pub glow_color: String,
    pub glow_blur: String,
    pub glow_opacity: String,
    pub heading_font_family: String,
    pub body_font_family: String,
    pub heading_font_size: String,
    pub body_font_size: String,
    pub heading_font_color: String,
    pub body_font_color: String,
}

impl StyleValues {
    /// Every custom property with its value, in emission order.
    pub fn css_variables(&self) -> Vec<(&'static str, &str)> {
        vec![
            (var::PAGE_BACKGROUND, self.page_background.as_str()),
            (var::WIDGET_BACKGROUND, self.widget_background.as_str()),
            (var::WIDGET_BORDER_COLOR, self.widget_border_color.as_str()),
            (var::WIDGET_BORDER_WIDTH, self.widget_border_width.as_str()),
            (var::ACCENT_COLOR, self.accent_color.as_str()),
            (var::BUTTON_CORNER_RADIUS, self.corner_radius.as_str()),
            (var::WIDGET_SPACING, self.widget_spacing.as_str()),
            (var::WIDGET_SHADOW, self.widget_shadow.as_str()),
            (var::WIDGET_GLOW_COLOR, self.glow_color.as_str()),
            (var::WIDGET_GLOW_BLUR, self.glow_blur.as_str()),
            (var::WIDGET_GLOW_OPACITY, self.glow_opacity.as_str()),
            (var::HEADING_FONT_FAMILY, self.heading_font_family.as_str()),
            (var::BODY_FONT_FAMILY, self.body_font_family.as_str()),
            (var::HEADING_FONT_SIZE, self.heading_font_size.as_str()),
            (var::BODY_FONT_SIZE, self.body_font_size.as_str()),
            (var::HEADING_FONT_COLOR, self.heading_font_color.as_str()),
            (var::BODY_FONT_COLOR, self.body_font_color.as_str()),
        ]
    }

    /// Strip characters that could close a declaration, a rule or the
    /// surrounding `<style>` element.
    pub(crate) fn sanitized(mut self) -> Self {
        for field in [
            &mut self.page_background,
            &mut self.widget_background,
            &mut self.widget_border_color,
            &mut self.widget_border_width,
            &mut self.accent_color,
            &mut self.corner_radius,
            &mut self.widget_spacing,
            &mut self.widget_shadow,
            &mut self.glow_color,
            &mut self.glow_blur,
            &mut self.glow_opacity,
            &mut self.heading_font_family,
            &mut self.body_font_family,
            &mut self.heading_font_size,
            &mut self.body_font_size,
            &mut self.heading_font_color,
            &mut self.body_font_color,
        ] {
            if field.contains(is_unsafe) {
                tracing::debug!(value = %field, "stripping unsafe characters from token value");
                field.retain(|c| !is_unsafe(c));
            }
            // Removing one marker can join its neighbours into another.
            while field.contains("/*") || field.contains("*/") {
                tracing::debug!(value = %field, "stripping comment markers from token value");
                *field = field.replace("/*", "").replace("*/", "");
            }
        }
        self
    }
}

fn is_unsafe(c: char) -> bool {
    matches!(c, ';' | '{' | '}' | '<' | '>' | '\\') || c.is_control()
}
