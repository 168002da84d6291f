//! Token groups as persisted in the theme and page JSON columns

use crate::error::TokenParseError;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

/// The four independent token groups of a theme or page
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TokenGroupKind {
    Shape,
    Color,
    Typography,
    Widget,
}

impl TokenGroupKind {
    /// Short id used on the command line and in logs.
    pub fn id(self) -> &'static str {
        match self {
            Self::Shape => "shape",
            Self::Color => "color",
            Self::Typography => "typography",
            Self::Widget => "widget",
        }
    }

    /// Column the group is stored under.
    pub fn column(self) -> &'static str {
        match self {
            Self::Shape => "shape_tokens",
            Self::Color => "color_tokens",
            Self::Typography => "typography_tokens",
            Self::Widget => "widget_styles",
        }
    }

    pub fn all() -> &'static [TokenGroupKind] {
        const KINDS: [TokenGroupKind; 4] = [
            TokenGroupKind::Shape,
            TokenGroupKind::Color,
            TokenGroupKind::Typography,
            TokenGroupKind::Widget,
        ];
        &KINDS
    }

    /// Accepts either the short id or the column name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.id() == name || kind.column() == name)
    }
}

impl Display for TokenGroupKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// Value of one category inside a token group
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenValue {
    /// A single value, e.g. `"border_effect": "glow"`
    Flat(String),
    /// Variant key → CSS value, e.g. `"corner": {"md": "0.75rem"}`
    Variants(IndexMap<String, String>),
}

impl TokenValue {
    pub fn flat(value: impl Into<String>) -> Self {
        Self::Flat(value.into())
    }

    pub fn variants<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Variants(
            entries
                .into_iter()
                .map(|(k, v)| {
                    let key: String = k.into();
                    (variant_key(&key), v.into())
                })
                .collect(),
        )
    }

    pub fn as_flat(&self) -> Option<&str> {
        match self {
            Self::Flat(value) => Some(value),
            Self::Variants(_) => None,
        }
    }

    pub fn as_variants(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Self::Flat(_) => None,
            Self::Variants(map) => Some(map),
        }
    }

    /// Value for a variant key, matched case-insensitively. A flat value
    /// applies to every variant.
    pub fn variant(&self, key: &str) -> Option<&str> {
        match self {
            Self::Flat(value) => Some(value),
            Self::Variants(map) => map
                .get(key)
                .or_else(|| map.get(&variant_key(key)))
                .map(String::as_str),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Self::Flat(value) => Value::String(value.clone()),
            Self::Variants(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            ),
        }
    }
}

/// One token group: category name → [`TokenValue`], in stored order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenGroup {
    categories: IndexMap<String, TokenValue>,
}

impl TokenGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict parse for validating editor input.
    ///
    /// Fails on invalid JSON, a non-object root, or any value that is not a
    /// string, number or null (reporting the first such path).
    pub fn from_json(src: &str) -> Result<Self, TokenParseError> {
        let value: Value = serde_json::from_str(src)?;
        let (group, rejected) = Self::from_value(&value)?;
        match rejected.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(group),
        }
    }

    /// Lenient parse used on the render path.
    ///
    /// Returns `None` when the column is absent, blank, or not a JSON object.
    /// Unsupported entries are dropped individually.
    pub fn parse_lenient(src: Option<&str>) -> Option<Self> {
        let src = src?.trim();
        if src.is_empty() {
            return None;
        }

        let value: Value = match serde_json::from_str(src) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(error = %err, "ignoring malformed token json");
                return None;
            }
        };

        match Self::from_value(&value) {
            Ok((group, rejected)) => {
                for err in rejected {
                    tracing::trace!(error = %err, "dropping token entry");
                }
                Some(group)
            }
            Err(err) => {
                tracing::debug!(error = %err, "ignoring token group");
                None
            }
        }
    }

    fn from_value(value: &Value) -> Result<(Self, Vec<TokenParseError>), TokenParseError> {
        let Value::Object(map) = value else {
            return Err(TokenParseError::NotAnObject {
                found: kind_name(value),
            });
        };

        let mut group = Self::new();
        let mut rejected = Vec::new();

        for (category, raw) in map {
            match raw {
                Value::Object(variants) => {
                    let mut out = IndexMap::with_capacity(variants.len());
                    for (key, value) in variants {
                        match scalar(value) {
                            Ok(Some(text)) => {
                                out.insert(variant_key(key), text);
                            }
                            Ok(None) => {}
                            Err(found) => rejected.push(TokenParseError::UnsupportedValue {
                                path: format!("{category}.{key}"),
                                found,
                            }),
                        }
                    }
                    // An empty variant map carries nothing to shadow with.
                    if !out.is_empty() {
                        group
                            .categories
                            .insert(category.clone(), TokenValue::Variants(out));
                    }
                }
                other => match scalar(other) {
                    Ok(Some(text)) => {
                        group.categories.insert(category.clone(), TokenValue::Flat(text));
                    }
                    Ok(None) => {}
                    Err(found) => rejected.push(TokenParseError::UnsupportedValue {
                        path: category.clone(),
                        found,
                    }),
                },
            }
        }

        Ok((group, rejected))
    }

    /// Builder-style insert.
    pub fn with(mut self, category: impl Into<String>, value: TokenValue) -> Self {
        self.insert(category, value);
        self
    }

    pub fn insert(&mut self, category: impl Into<String>, value: TokenValue) {
        self.categories.insert(category.into(), value);
    }

    pub fn get(&self, category: &str) -> Option<&TokenValue> {
        self.categories.get(category)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize back to the stored column format.
    pub fn to_json(&self) -> String {
        let map: Map<String, Value> = self
            .categories
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();
        Value::Object(map).to_string()
    }
}

/// Variant keys are stored trimmed and lowercased, like symbolic values.
pub(crate) fn variant_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

/// Stored scalars become CSS text; blanks and nulls count as absent.
fn scalar(value: &Value) -> Result<Option<String>, &'static str> {
    match value {
        Value::String(text) => {
            let text = text.trim();
            Ok((!text.is_empty()).then(|| text.to_string()))
        }
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Null => Ok(None),
        other => Err(kind_name(other)),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_flat_and_variant_categories() {
        let group = TokenGroup::from_json(
            r#"{"border_effect": "glow", "corner": {"none": "0px", "md": "0.75rem"}}"#,
        )
        .unwrap();

        assert_eq!(group.get("border_effect"), Some(&TokenValue::flat("glow")));
        let corner = group.get("corner").unwrap();
        assert_eq!(corner.variant("md"), Some("0.75rem"));
        assert_eq!(corner.variant("pill"), None);
    }

    #[test]
    fn variant_maps_keep_stored_order() {
        let group = TokenGroup::from_json(r#"{"corner": {"pill": "9999px", "none": "0px"}}"#).unwrap();
        let keys: Vec<&str> = group
            .get("corner")
            .and_then(TokenValue::as_variants)
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["pill", "none"]);
    }

    #[test]
    fn numbers_are_stringified_and_nulls_dropped() {
        let group =
            TokenGroup::from_json(r#"{"glow_opacity": {"subtle": 0.4}, "glow_color": null}"#).unwrap();
        assert_eq!(group.get("glow_opacity").unwrap().variant("subtle"), Some("0.4"));
        assert!(!group.contains("glow_color"));
    }

    #[test]
    fn blank_strings_and_empty_maps_are_absent() {
        let group = TokenGroup::from_json(r#"{"glow_color": "  ", "corner": {}}"#).unwrap();
        assert!(group.is_empty());
    }

    #[test]
    fn variant_keys_are_case_insensitive() {
        let group = TokenGroup::from_json(r#"{"glow_blur": {" Halo ": "24px"}}"#).unwrap();
        let blur = group.get("glow_blur").unwrap();
        assert_eq!(blur.as_variants().unwrap().keys().next().map(String::as_str), Some("halo"));
        assert_eq!(blur.variant("halo"), Some("24px"));
        assert_eq!(blur.variant("HALO"), Some("24px"));

        let built = TokenValue::variants([("Soft", "0.5rem")]);
        assert_eq!(built.variant("soft"), Some("0.5rem"));
    }

    #[test]
    fn flat_value_applies_to_every_variant() {
        let value = TokenValue::flat("#111111");
        assert_eq!(value.variant("heading"), Some("#111111"));
        assert_eq!(value.variant("body"), Some("#111111"));
    }

    #[test]
    fn strict_parse_reports_unsupported_path() {
        let err = TokenGroup::from_json(r#"{"corner": {"md": {"deep": "1px"}}}"#).unwrap_err();
        match err {
            TokenParseError::UnsupportedValue { path, found } => {
                assert_eq!(path, "corner.md");
                assert_eq!(found, "an object");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn strict_parse_rejects_non_objects() {
        assert!(matches!(
            TokenGroup::from_json("[1, 2]"),
            Err(TokenParseError::NotAnObject { found: "an array" })
        ));
        assert!(matches!(TokenGroup::from_json("{"), Err(TokenParseError::Json(_))));
    }

    #[test]
    fn lenient_parse_treats_malformed_json_as_absent() {
        assert_eq!(TokenGroup::parse_lenient(None), None);
        assert_eq!(TokenGroup::parse_lenient(Some("")), None);
        assert_eq!(TokenGroup::parse_lenient(Some("{not json")), None);
        assert_eq!(TokenGroup::parse_lenient(Some("\"glow\"")), None);
        assert_eq!(TokenGroup::parse_lenient(Some("null")), None);
    }

    #[test]
    fn lenient_parse_drops_only_bad_entries() {
        let group =
            TokenGroup::parse_lenient(Some(r##"{"border_effect": true, "glow_color": "#ff00ff"}"##))
                .unwrap();
        assert!(!group.contains("border_effect"));
        assert_eq!(group.get("glow_color"), Some(&TokenValue::flat("#ff00ff")));
    }

    #[test]
    fn to_json_round_trips_through_strict_parse() {
        let group = TokenGroup::new()
            .with("border_effect", TokenValue::flat("glow"))
            .with("glow_blur", TokenValue::variants([("subtle", "6px")]));
        assert_eq!(TokenGroup::from_json(&group.to_json()).unwrap(), group);
    }

    #[test]
    fn group_kind_accepts_id_or_column() {
        assert_eq!(TokenGroupKind::parse("widget"), Some(TokenGroupKind::Widget));
        assert_eq!(TokenGroupKind::parse("widget_styles"), Some(TokenGroupKind::Widget));
        assert_eq!(TokenGroupKind::parse("shape_tokens"), Some(TokenGroupKind::Shape));
        assert_eq!(TokenGroupKind::parse("fonts"), None);
    }
}
