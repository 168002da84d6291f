//! Compiled-in default tokens, the bottom layer of every resolution

use crate::mapper::{self, category};
use crate::tokens::{
    BorderEffect, BorderWidth, CornerStyle, Density, GlowIntensity, ShadowLevel, TokenGroup,
    TokenGroupKind, TokenValue, TypeScale,
};

/// Category and variant keys read by the resolver
pub mod keys {
    // shape_tokens
    pub const CORNER: &str = "corner";
    pub const BUTTON_CORNER: &str = "button_corner";
    pub const BORDER_WIDTH: &str = "border_width";
    pub const SPACING: &str = "spacing";

    // color_tokens
    pub const BACKGROUND: &str = "background";
    pub const BORDER: &str = "border";
    pub const ACCENT: &str = "accent";
    pub const PAGE: &str = "page";
    pub const WIDGET: &str = "widget";
    pub const PRIMARY: &str = "primary";

    // typography_tokens
    pub const FONT: &str = "font";
    pub const COLOR: &str = "color";
    pub const SCALE: &str = "scale";
    pub const SIZE: &str = "size";
    pub const HEADING: &str = "heading";
    pub const BODY: &str = "body";

    // widget_styles
    pub const BORDER_EFFECT: &str = "border_effect";
    pub const BORDER_GLOW_INTENSITY: &str = "border_glow_intensity";
    pub const BORDER_SHADOW_INTENSITY: &str = "border_shadow_intensity";
    pub const GLOW_COLOR: &str = "glow_color";
    pub const GLOW_BLUR: &str = "glow_blur";
    pub const GLOW_OPACITY: &str = "glow_opacity";
}

const DEFAULT_FONT: &str = "'Inter', system-ui, -apple-system, sans-serif";

/// The four default token groups
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultTokens {
    pub shape: TokenGroup,
    pub color: TokenGroup,
    pub typography: TokenGroup,
    pub widget: TokenGroup,
}

impl DefaultTokens {
    pub fn group(&self, kind: TokenGroupKind) -> &TokenGroup {
        match kind {
            TokenGroupKind::Shape => &self.shape,
            TokenGroupKind::Color => &self.color,
            TokenGroupKind::Typography => &self.typography,
            TokenGroupKind::Widget => &self.widget,
        }
    }

    /// Replace one default group, e.g. for a white-label deployment.
    pub fn with_group(mut self, kind: TokenGroupKind, group: TokenGroup) -> Self {
        match kind {
            TokenGroupKind::Shape => self.shape = group,
            TokenGroupKind::Color => self.color = group,
            TokenGroupKind::Typography => self.typography = group,
            TokenGroupKind::Widget => self.widget = group,
        }
        self
    }
}

impl Default for DefaultTokens {
    fn default() -> Self {
        Self {
            shape: TokenGroup::new()
                .with(keys::CORNER, TokenValue::variants(mapper::table(category::CORNER)))
                .with(keys::BUTTON_CORNER, TokenValue::flat(CornerStyle::default().id()))
                .with(keys::BORDER_WIDTH, TokenValue::flat(BorderWidth::default().id()))
                .with(keys::SPACING, TokenValue::flat(Density::default().id())),
            color: TokenGroup::new()
                .with(
                    keys::BACKGROUND,
                    TokenValue::variants([(keys::PAGE, "#ffffff"), (keys::WIDGET, "#f8fafc")]),
                )
                .with(keys::BORDER, TokenValue::variants([(keys::WIDGET, "#e2e8f0")]))
                .with(keys::ACCENT, TokenValue::variants([(keys::PRIMARY, "#6366f1")])),
            typography: TokenGroup::new()
                .with(
                    keys::FONT,
                    TokenValue::variants([(keys::HEADING, DEFAULT_FONT), (keys::BODY, DEFAULT_FONT)]),
                )
                .with(
                    keys::COLOR,
                    TokenValue::variants([(keys::HEADING, "#0f172a"), (keys::BODY, "#334155")]),
                )
                .with(keys::SCALE, TokenValue::flat(TypeScale::default().id())),
            widget: TokenGroup::new()
                .with(keys::BORDER_EFFECT, TokenValue::flat(BorderEffect::default().id()))
                .with(
                    keys::BORDER_GLOW_INTENSITY,
                    TokenValue::flat(GlowIntensity::default().id()),
                )
                .with(keys::GLOW_COLOR, TokenValue::flat("#8b5cf6"))
                .with(keys::GLOW_BLUR, TokenValue::variants(mapper::table(category::GLOW_BLUR)))
                .with(
                    keys::GLOW_OPACITY,
                    TokenValue::variants(mapper::table(category::GLOW_OPACITY)),
                )
                .with(
                    keys::BORDER_SHADOW_INTENSITY,
                    TokenValue::flat(ShadowLevel::Subtle.id()),
                ),
        }
    }
}
