//! Layered token resolution
//!
//! For each token group, categories are taken from the first layer that has
//! them: page overrides, then the theme, then [`DefaultTokens`]. A category is
//! replaced as a whole; a page `corner` map hides every theme `corner` variant.
//! Variants missing from the winning map fall back to the compiled-in default
//! for that variant, never to a shadowed theme value.

use crate::defaults::{keys, DefaultTokens};
use crate::mapper::{self, category};
use crate::record::{PageRecord, ThemeRecord, TokenColumns};
use crate::tokens::{
    BorderEffect, CornerStyle, GlowIntensity, TokenGroup, TokenGroupKind, TokenValue,
};
use crate::values::StyleValues;
use indexmap::IndexMap;

/// Layer a resolved category was taken from
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TokenSource {
    Page,
    Theme,
    Default,
}

/// A category value together with its provenance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedToken {
    pub value: TokenValue,
    pub source: TokenSource,
}

/// One fully merged token group
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedGroup {
    kind: TokenGroupKind,
    tokens: IndexMap<String, ResolvedToken>,
    defaults: TokenGroup,
}

impl ResolvedGroup {
    pub fn kind(&self) -> TokenGroupKind {
        self.kind
    }

    pub fn get(&self, category: &str) -> Option<&ResolvedToken> {
        self.tokens.get(category)
    }

    pub fn source(&self, category: &str) -> Option<TokenSource> {
        self.get(category).map(|token| token.source)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedToken)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Flat value of a category.
    ///
    /// If the winning layer stored a variant map where a flat value is
    /// expected, the default's flat value is used.
    pub fn flat(&self, category: &str) -> Option<&str> {
        self.get(category)
            .and_then(|token| token.value.as_flat())
            .or_else(|| self.defaults.get(category).and_then(TokenValue::as_flat))
    }

    /// Variant of a category: the winning layer's value, else the default's.
    pub fn leaf(&self, category: &str, key: &str) -> Option<&str> {
        self.get(category)
            .and_then(|token| token.value.variant(key))
            .or_else(|| self.defaults.get(category).and_then(|value| value.variant(key)))
    }

    fn is_explicit(&self, category: &str) -> bool {
        self.source(category)
            .is_some_and(|source| source != TokenSource::Default)
    }
}

/// The merged configuration for one render
///
/// Built fresh per request and never persisted. Call [`ResolvedStyle::values`]
/// to map it to concrete CSS values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub shape: ResolvedGroup,
    pub color: ResolvedGroup,
    pub typography: ResolvedGroup,
    pub widget: ResolvedGroup,
}

impl ResolvedStyle {
    pub fn group(&self, kind: TokenGroupKind) -> &ResolvedGroup {
        match kind {
            TokenGroupKind::Shape => &self.shape,
            TokenGroupKind::Color => &self.color,
            TokenGroupKind::Typography => &self.typography,
            TokenGroupKind::Widget => &self.widget,
        }
    }

    /// Border radius for buttons and widgets.
    ///
    /// - a flat `corner` is mapped (`pill` → `9999px`) or used literally
    /// - a single-entry `corner` map uses its one value
    /// - otherwise the variant named by `button_corner`, then `md`, then the
    ///   first stored variant
    pub fn corner_radius(&self) -> String {
        let Some(corner) = self.shape.get(keys::CORNER) else {
            return mapper::map_token(category::CORNER, "").to_string();
        };

        let map = match &corner.value {
            TokenValue::Flat(value) => {
                return mapper::map_or_literal(category::CORNER, value).into_owned()
            }
            TokenValue::Variants(map) => map,
        };

        if map.len() == 1 {
            if let Some(value) = map.values().next() {
                return value.clone();
            }
        }

        let selector = self.shape.flat(keys::BUTTON_CORNER).map(normalize);
        let explicit = self.shape.is_explicit(keys::BUTTON_CORNER);

        selector
            .as_deref()
            .and_then(|name| map.get(name))
            .map(String::as_str)
            .or_else(|| {
                selector
                    .as_deref()
                    .filter(|_| explicit)
                    .and_then(|name| mapper::lookup(category::CORNER, name))
            })
            .or_else(|| map.get(CornerStyle::default().id()).map(String::as_str))
            .or_else(|| map.values().next().map(String::as_str))
            .unwrap_or_else(|| mapper::map_token(category::CORNER, ""))
            .to_string()
    }

    /// Map every token the generator needs to its concrete CSS value.
    pub fn values(&self) -> StyleValues {
        let effect_id = self.widget.flat(keys::BORDER_EFFECT).map(normalize);
        let border_effect = effect_id
            .as_deref()
            .and_then(BorderEffect::parse)
            .unwrap_or_default();

        let intensity_id = self
            .widget
            .flat(keys::BORDER_GLOW_INTENSITY)
            .map(normalize)
            .unwrap_or_else(|| GlowIntensity::default().id().to_string());
        let glow_intensity = GlowIntensity::parse(&intensity_id).unwrap_or_default();

        let scale = self.typography.flat(keys::SCALE).unwrap_or_default();

        StyleValues {
            page_background: leaf_or_initial(&self.color, keys::BACKGROUND, keys::PAGE),
            widget_background: leaf_or_initial(&self.color, keys::BACKGROUND, keys::WIDGET),
            widget_border_color: leaf_or_initial(&self.color, keys::BORDER, keys::WIDGET),
            accent_color: leaf_or_initial(&self.color, keys::ACCENT, keys::PRIMARY),
            widget_border_width: mapped(&self.shape, keys::BORDER_WIDTH, category::BORDER_WIDTH),
            corner_radius: self.corner_radius(),
            widget_spacing: mapped(&self.shape, keys::SPACING, category::SPACING),
            widget_shadow: mapped(&self.widget, keys::BORDER_SHADOW_INTENSITY, category::SHADOW),
            border_effect,
            glow_intensity,
            glow_color: self
                .widget
                .flat(keys::GLOW_COLOR)
                .unwrap_or(mapper::GENERIC_FALLBACK)
                .to_string(),
            glow_blur: scaled(&self.widget, keys::GLOW_BLUR, category::GLOW_BLUR, &intensity_id),
            glow_opacity: scaled(
                &self.widget,
                keys::GLOW_OPACITY,
                category::GLOW_OPACITY,
                &intensity_id,
            ),
            heading_font_family: leaf_or_initial(&self.typography, keys::FONT, keys::HEADING),
            body_font_family: leaf_or_initial(&self.typography, keys::FONT, keys::BODY),
            heading_font_size: self
                .typography
                .leaf(keys::SIZE, keys::HEADING)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    mapper::map_or_literal(category::HEADING_SIZE, scale).into_owned()
                }),
            body_font_size: self
                .typography
                .leaf(keys::SIZE, keys::BODY)
                .map(str::to_string)
                .unwrap_or_else(|| mapper::map_or_literal(category::BODY_SIZE, scale).into_owned()),
            heading_font_color: leaf_or_initial(&self.typography, keys::COLOR, keys::HEADING),
            body_font_color: leaf_or_initial(&self.typography, keys::COLOR, keys::BODY),
        }
        .sanitized()
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

fn leaf_or_initial(group: &ResolvedGroup, category: &str, key: &str) -> String {
    group
        .leaf(category, key)
        .unwrap_or(mapper::GENERIC_FALLBACK)
        .to_string()
}

/// A flat symbolic selector mapped through its table.
fn mapped(group: &ResolvedGroup, key: &str, table: &str) -> String {
    mapper::map_or_literal(table, group.flat(key).unwrap_or_default()).into_owned()
}

/// A variant table keyed by a symbolic intensity, with the mapper as the
/// last resort for unknown intensities.
fn scaled(group: &ResolvedGroup, category: &str, table: &str, key: &str) -> String {
    group
        .leaf(category, key)
        .map(str::to_string)
        .unwrap_or_else(|| mapper::map_token(table, key).to_string())
}

/// Merges page overrides, theme tokens and defaults
#[derive(Clone, Debug, Default)]
pub struct TokenResolver {
    defaults: DefaultTokens,
}

impl TokenResolver {
    pub fn new(defaults: DefaultTokens) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &DefaultTokens {
        &self.defaults
    }

    /// Resolve a page against its theme (`None` = no theme assigned).
    pub fn resolve(&self, page: &PageRecord, theme: Option<&ThemeRecord>) -> ResolvedStyle {
        if let Some(theme) = theme {
            if page.theme_id != Some(theme.id) {
                tracing::warn!(
                    page_id = page.id,
                    theme_id = theme.id,
                    expected = ?page.theme_id,
                    "page resolved against a theme it does not reference"
                );
            }
        }

        self.resolve_layers(Some(&page.overrides), theme.map(|t| &t.tokens))
    }

    /// Resolve raw token columns directly.
    pub fn resolve_layers(
        &self,
        page: Option<&TokenColumns>,
        theme: Option<&TokenColumns>,
    ) -> ResolvedStyle {
        let merge = |kind: TokenGroupKind| {
            self.merge(
                kind,
                page.and_then(|columns| columns.group(kind)),
                theme.and_then(|columns| columns.group(kind)),
            )
        };

        ResolvedStyle {
            shape: merge(TokenGroupKind::Shape),
            color: merge(TokenGroupKind::Color),
            typography: merge(TokenGroupKind::Typography),
            widget: merge(TokenGroupKind::Widget),
        }
    }

    fn merge(
        &self,
        kind: TokenGroupKind,
        page: Option<TokenGroup>,
        theme: Option<TokenGroup>,
    ) -> ResolvedGroup {
        let defaults = self.defaults.group(kind);
        let layers = [
            (TokenSource::Default, Some(defaults)),
            (TokenSource::Theme, theme.as_ref()),
            (TokenSource::Page, page.as_ref()),
        ];

        // Lowest layer first; a higher layer replaces the whole category.
        let mut tokens = IndexMap::with_capacity(defaults.len());
        for (source, group) in layers {
            let Some(group) = group else { continue };
            for (category, value) in group.iter() {
                tokens.insert(
                    category.to_string(),
                    ResolvedToken {
                        value: value.clone(),
                        source,
                    },
                );
            }
        }

        tracing::trace!(
            group = kind.column(),
            categories = tokens.len(),
            "resolved token group"
        );

        ResolvedGroup {
            kind,
            tokens,
            defaults: defaults.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn theme_with(kind: TokenGroupKind, json: &str) -> ThemeRecord {
        ThemeRecord::new(1, "Test").with_tokens(kind, json)
    }

    fn page() -> PageRecord {
        PageRecord::new(10, 20, "listen").with_theme(1)
    }

    #[test]
    fn page_override_wins_over_theme() {
        let theme = theme_with(TokenGroupKind::Widget, r##"{"glow_color": "#00ff00"}"##);
        let page = page().with_override(TokenGroupKind::Widget, r##"{"glow_color": "#ff0000"}"##);

        let style = TokenResolver::default().resolve(&page, Some(&theme));
        assert_eq!(style.widget.flat("glow_color"), Some("#ff0000"));
        assert_eq!(style.widget.source("glow_color"), Some(TokenSource::Page));
    }

    #[test]
    fn theme_value_used_when_page_is_silent() {
        let theme = theme_with(TokenGroupKind::Widget, r##"{"glow_color": "#00ff00"}"##);
        let style = TokenResolver::default().resolve(&page(), Some(&theme));
        assert_eq!(style.widget.flat("glow_color"), Some("#00ff00"));
        assert_eq!(style.widget.source("glow_color"), Some(TokenSource::Theme));
    }

    #[test]
    fn default_used_when_both_layers_are_silent() {
        let style = TokenResolver::default().resolve(&page(), None);
        assert_eq!(style.widget.flat("glow_color"), Some("#8b5cf6"));
        assert_eq!(style.widget.source("glow_color"), Some(TokenSource::Default));
    }

    #[test]
    fn page_category_shadows_whole_theme_category() {
        let theme = theme_with(
            TokenGroupKind::Shape,
            r#"{"corner": {"none": "0px", "pill": "9999px"}}"#,
        );
        let page = page().with_override(TokenGroupKind::Shape, r#"{"corner": {"lg": "2rem"}}"#);

        let style = TokenResolver::default().resolve(&page, Some(&theme));
        let corner = style.shape.get("corner").unwrap();
        assert_eq!(corner.source, TokenSource::Page);
        assert_eq!(corner.value, TokenValue::variants([("lg", "2rem")]));
        // The shadowed theme variant is not reintroduced; the default fills in.
        assert_eq!(style.shape.leaf("corner", "pill"), Some("9999px"));
        assert_eq!(style.shape.leaf("corner", "none"), Some("0px"));
        assert_eq!(style.corner_radius(), "2rem");
    }

    #[test]
    fn missing_variant_falls_to_default_not_theme() {
        let theme = theme_with(
            TokenGroupKind::Widget,
            r#"{"glow_blur": {"subtle": "3px", "pronounced": "30px"}}"#,
        );
        let page = page().with_override(
            TokenGroupKind::Widget,
            r#"{"glow_blur": {"subtle": "4px"}, "border_glow_intensity": "pronounced"}"#,
        );

        let values = TokenResolver::default().resolve(&page, Some(&theme)).values();
        assert_eq!(values.glow_blur, "16px");
    }

    #[test]
    fn malformed_page_layer_falls_through_to_theme() {
        let theme = theme_with(TokenGroupKind::Widget, r#"{"border_effect": "glow"}"#);
        let page = page().with_override(TokenGroupKind::Widget, "{\"border_effect\": ");

        let values = TokenResolver::default().resolve(&page, Some(&theme)).values();
        assert_eq!(values.border_effect, BorderEffect::Glow);
    }

    #[test]
    fn resolution_is_total_for_every_generated_variable() {
        let layers = [
            (None, None),
            (Some(r#"{"corner": "wobbly"}"#), Some("not json")),
            (Some("[]"), Some(r#"{"corner": {"xl": "3rem", "xs": "1px"}}"#)),
        ];
        for (page_json, theme_json) in layers {
            let mut page = page();
            let mut theme = ThemeRecord::new(1, "Test");
            for kind in TokenGroupKind::all() {
                page.overrides.set(*kind, page_json.map(str::to_string));
                theme.tokens.set(*kind, theme_json.map(str::to_string));
            }
            let values = TokenResolver::default().resolve(&page, Some(&theme)).values();
            for (name, value) in values.css_variables() {
                assert!(!value.is_empty(), "{name} resolved empty");
                assert_ne!(value, mapper::GENERIC_FALLBACK, "{name} fell through every layer");
            }
        }
    }

    #[test]
    fn extra_categories_are_kept_after_defaults() {
        let theme = theme_with(TokenGroupKind::Shape, r#"{"notch": "4px"}"#);
        let style = TokenResolver::default().resolve(&page(), Some(&theme));
        let last = style.shape.iter().last().unwrap();
        assert_eq!(last.0, "notch");
        assert_eq!(last.1.source, TokenSource::Theme);
    }

    #[test]
    fn explicit_button_corner_selects_from_multi_entry_map() {
        let theme = theme_with(
            TokenGroupKind::Shape,
            r#"{"corner": {"none": "0px", "lg": "2rem"}, "button_corner": "lg"}"#,
        );
        let style = TokenResolver::default().resolve(&page(), Some(&theme));
        assert_eq!(style.corner_radius(), "2rem");

        let theme = theme_with(
            TokenGroupKind::Shape,
            r#"{"corner": {"none": "0px", "lg": "2rem"}, "button_corner": "pill"}"#,
        );
        let style = TokenResolver::default().resolve(&page(), Some(&theme));
        assert_eq!(style.corner_radius(), "9999px");
    }

    #[test]
    fn multi_entry_map_without_selector_prefers_md_then_first() {
        let theme = theme_with(TokenGroupKind::Shape, r#"{"corner": {"sm": "4px", "md": "10px"}}"#);
        let style = TokenResolver::default().resolve(&page(), Some(&theme));
        assert_eq!(style.corner_radius(), "10px");

        let theme = theme_with(TokenGroupKind::Shape, r#"{"corner": {"sm": "4px", "lg": "20px"}}"#);
        let style = TokenResolver::default().resolve(&page(), Some(&theme));
        assert_eq!(style.corner_radius(), "4px");
    }

    #[test]
    fn flat_corner_is_mapped_or_literal() {
        let theme = theme_with(TokenGroupKind::Shape, r#"{"corner": "pill"}"#);
        let style = TokenResolver::default().resolve(&page(), Some(&theme));
        assert_eq!(style.corner_radius(), "9999px");

        let theme = theme_with(TokenGroupKind::Shape, r#"{"corner": "6px"}"#);
        let style = TokenResolver::default().resolve(&page(), Some(&theme));
        assert_eq!(style.corner_radius(), "6px");
    }

    #[test]
    fn typography_scale_and_explicit_sizes() {
        let theme = theme_with(
            TokenGroupKind::Typography,
            r#"{"scale": "large", "size": {"heading": "3rem"}}"#,
        );
        let values = TokenResolver::default().resolve(&page(), Some(&theme)).values();
        assert_eq!(values.heading_font_size, "3rem");
        assert_eq!(values.body_font_size, "1.125rem");
    }

    #[test]
    fn symbolic_values_are_case_insensitive() {
        let theme = theme_with(
            TokenGroupKind::Widget,
            r#"{"border_effect": "Glow", "border_glow_intensity": "PRONOUNCED"}"#,
        );
        let values = TokenResolver::default().resolve(&page(), Some(&theme)).values();
        assert_eq!(values.border_effect, BorderEffect::Glow);
        assert_eq!(values.glow_intensity, GlowIntensity::Pronounced);
        assert_eq!(values.glow_blur, "16px");
        assert_eq!(values.glow_opacity, "0.8");
    }

    #[test]
    fn unknown_intensity_uses_mapper_fallback() {
        let theme = theme_with(TokenGroupKind::Widget, r#"{"border_glow_intensity": "blinding"}"#);
        let values = TokenResolver::default().resolve(&page(), Some(&theme)).values();
        assert_eq!(values.glow_intensity, GlowIntensity::Subtle);
        assert_eq!(values.glow_blur, "8px");
        assert_eq!(values.glow_opacity, "0.5");
    }

    #[test]
    fn custom_intensity_variant_is_honored() {
        let theme = theme_with(
            TokenGroupKind::Widget,
            r#"{"border_glow_intensity": "halo", "glow_blur": {"halo": "24px"}}"#,
        );
        let values = TokenResolver::default().resolve(&page(), Some(&theme)).values();
        assert_eq!(values.glow_blur, "24px");
    }

    #[test]
    fn custom_intensity_keys_ignore_case() {
        let theme = theme_with(
            TokenGroupKind::Widget,
            r#"{"border_effect": "glow", "border_glow_intensity": "Halo", "glow_blur": {"Halo": "24px"}}"#,
        );
        let values = TokenResolver::default().resolve(&page(), Some(&theme)).values();
        assert_eq!(values.glow_blur, "24px");
    }

    #[test]
    fn button_corner_selects_mixed_case_variant() {
        let theme = theme_with(
            TokenGroupKind::Shape,
            r#"{"corner": {"none": "0px", "Soft": "0.5rem"}, "button_corner": "SOFT"}"#,
        );
        let style = TokenResolver::default().resolve(&page(), Some(&theme));
        assert_eq!(style.corner_radius(), "0.5rem");
    }

    #[test]
    fn replaced_defaults_feed_resolution() {
        let defaults = DefaultTokens::default().with_group(
            TokenGroupKind::Color,
            TokenGroup::new().with("background", TokenValue::flat("#000000")),
        );
        let values = TokenResolver::new(defaults).resolve(&page(), None).values();
        assert_eq!(values.page_background, "#000000");
        assert_eq!(values.widget_background, "#000000");
        assert_eq!(values.accent_color, mapper::GENERIC_FALLBACK);
    }
}
