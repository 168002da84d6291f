//! Symbolic token → physical CSS value tables
//!
//! Every category has a fixed table and a fallback. Lookups never fail:
//! an unknown `(category, value)` pair maps to the category's fallback, and an
//! unknown category maps to [`GENERIC_FALLBACK`].

use crate::tokens::{BorderWidth, CornerStyle, Density, GlowIntensity, ShadowLevel, TypeScale};
use std::borrow::Cow;

/// Returned for categories with no table.
pub const GENERIC_FALLBACK: &str = "initial";

/// Category names with a lookup table
pub mod category {
    pub const CORNER: &str = "corner";
    pub const GLOW_BLUR: &str = "glow_blur";
    pub const GLOW_OPACITY: &str = "glow_opacity";
    pub const BORDER_WIDTH: &str = "border_width";
    pub const SPACING: &str = "spacing";
    pub const SHADOW: &str = "shadow";
    pub const HEADING_SIZE: &str = "heading_size";
    pub const BODY_SIZE: &str = "body_size";

    pub const ALL: [&str; 8] = [
        CORNER,
        GLOW_BLUR,
        GLOW_OPACITY,
        BORDER_WIDTH,
        SPACING,
        SHADOW,
        HEADING_SIZE,
        BODY_SIZE,
    ];
}

/// Strict lookup: `None` if the category or value is unknown.
pub fn lookup(category: &str, value: &str) -> Option<&'static str> {
    let value = value.trim().to_ascii_lowercase();
    let value = value.as_str();
    match category {
        category::CORNER => CornerStyle::parse(value).map(CornerStyle::css_value),
        category::GLOW_BLUR => GlowIntensity::parse(value).map(GlowIntensity::blur),
        category::GLOW_OPACITY => GlowIntensity::parse(value).map(GlowIntensity::opacity),
        category::BORDER_WIDTH => BorderWidth::parse(value).map(BorderWidth::css_value),
        category::SPACING => Density::parse(value).map(Density::css_value),
        category::SHADOW => ShadowLevel::parse(value).map(ShadowLevel::css_value),
        category::HEADING_SIZE => TypeScale::parse(value).map(TypeScale::heading_size),
        category::BODY_SIZE => TypeScale::parse(value).map(TypeScale::body_size),
        _ => None,
    }
}

/// Documented fallback for a category.
pub fn fallback(category: &str) -> Option<&'static str> {
    match category {
        category::CORNER => Some(CornerStyle::default().css_value()),
        category::GLOW_BLUR => Some(GlowIntensity::default().blur()),
        category::GLOW_OPACITY => Some(GlowIntensity::default().opacity()),
        category::BORDER_WIDTH => Some(BorderWidth::default().css_value()),
        category::SPACING => Some(Density::default().css_value()),
        category::SHADOW => Some(ShadowLevel::default().css_value()),
        category::HEADING_SIZE => Some(TypeScale::default().heading_size()),
        category::BODY_SIZE => Some(TypeScale::default().body_size()),
        _ => None,
    }
}

/// Total lookup: table value, else the category fallback.
pub fn map_token(category: &str, value: &str) -> &'static str {
    lookup(category, value)
        .or_else(|| fallback(category))
        .unwrap_or(GENERIC_FALLBACK)
}

/// Like [`map_token`], but passes literal CSS values (`12px`, `#fff`,
/// `calc(...)`) through unchanged.
pub fn map_or_literal<'a>(category: &str, value: &'a str) -> Cow<'a, str> {
    if let Some(mapped) = lookup(category, value) {
        return Cow::Borrowed(mapped);
    }
    if is_literal(value) {
        return Cow::Borrowed(value.trim());
    }
    tracing::trace!(category, value, "unknown token value, using fallback");
    Cow::Borrowed(map_token(category, value))
}

/// Full table for a category, in declaration order.
pub fn table(category: &str) -> Vec<(&'static str, &'static str)> {
    match category {
        category::CORNER => CornerStyle::all().iter().map(|s| (s.id(), s.css_value())).collect(),
        category::GLOW_BLUR => GlowIntensity::all().iter().map(|i| (i.id(), i.blur())).collect(),
        category::GLOW_OPACITY => GlowIntensity::all()
            .iter()
            .map(|i| (i.id(), i.opacity()))
            .collect(),
        category::BORDER_WIDTH => BorderWidth::all()
            .iter()
            .map(|w| (w.id(), w.css_value()))
            .collect(),
        category::SPACING => Density::all().iter().map(|d| (d.id(), d.css_value())).collect(),
        category::SHADOW => ShadowLevel::all()
            .iter()
            .map(|l| (l.id(), l.css_value()))
            .collect(),
        category::HEADING_SIZE => TypeScale::all()
            .iter()
            .map(|s| (s.id(), s.heading_size()))
            .collect(),
        category::BODY_SIZE => TypeScale::all().iter().map(|s| (s.id(), s.body_size())).collect(),
        _ => Vec::new(),
    }
}

/// Whether a stored value already is a physical CSS value.
pub fn is_literal(value: &str) -> bool {
    let value = value.trim();
    match value.chars().next() {
        Some(c) if c.is_ascii_digit() || c == '.' || c == '#' || c == '-' => true,
        Some(_) => value.contains('('),
        None => false,
    }
}
