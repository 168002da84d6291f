//! Page and theme records as supplied by the data-access layer

use crate::tokens::{TokenGroup, TokenGroupKind};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The four token columns shared by themes and pages, as raw JSON text
///
/// Text is kept unparsed so malformed data can be tolerated at resolution
/// time. When deserializing, a column may also be given as an inline JSON
/// object, which is stored as its serialized text.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenColumns {
    #[serde(default, deserialize_with = "column_text", skip_serializing_if = "Option::is_none")]
    pub shape_tokens: Option<String>,
    #[serde(default, deserialize_with = "column_text", skip_serializing_if = "Option::is_none")]
    pub color_tokens: Option<String>,
    #[serde(default, deserialize_with = "column_text", skip_serializing_if = "Option::is_none")]
    pub typography_tokens: Option<String>,
    #[serde(default, deserialize_with = "column_text", skip_serializing_if = "Option::is_none")]
    pub widget_styles: Option<String>,
}

impl TokenColumns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(&self, kind: TokenGroupKind) -> Option<&str> {
        match kind {
            TokenGroupKind::Shape => self.shape_tokens.as_deref(),
            TokenGroupKind::Color => self.color_tokens.as_deref(),
            TokenGroupKind::Typography => self.typography_tokens.as_deref(),
            TokenGroupKind::Widget => self.widget_styles.as_deref(),
        }
    }

    pub fn set(&mut self, kind: TokenGroupKind, json: Option<String>) {
        let slot = match kind {
            TokenGroupKind::Shape => &mut self.shape_tokens,
            TokenGroupKind::Color => &mut self.color_tokens,
            TokenGroupKind::Typography => &mut self.typography_tokens,
            TokenGroupKind::Widget => &mut self.widget_styles,
        };
        *slot = json;
    }

    /// Builder-style setter taking raw column text.
    pub fn with_json(mut self, kind: TokenGroupKind, json: impl Into<String>) -> Self {
        self.set(kind, Some(json.into()));
        self
    }

    /// Builder-style setter serializing a parsed group.
    pub fn with_group(self, kind: TokenGroupKind, group: &TokenGroup) -> Self {
        self.with_json(kind, group.to_json())
    }

    /// Parse one column leniently (absent or malformed → `None`).
    pub fn group(&self, kind: TokenGroupKind) -> Option<TokenGroup> {
        let group = TokenGroup::parse_lenient(self.column(kind));
        if group.is_none() && self.column(kind).is_some() {
            tracing::debug!(column = kind.column(), "token column present but unusable");
        }
        group
    }

    pub fn is_empty(&self) -> bool {
        TokenGroupKind::all()
            .iter()
            .all(|kind| self.column(*kind).is_none())
    }
}

fn column_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// A public link-in-bio page
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageRecord {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub theme_id: Option<i64>,
    /// Page-level overrides, same shape as the theme's tokens
    #[serde(flatten)]
    pub overrides: TokenColumns,
}

impl PageRecord {
    pub fn new(id: i64, user_id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            username: username.into(),
            theme_id: None,
            overrides: TokenColumns::default(),
        }
    }

    pub fn with_theme(mut self, theme_id: i64) -> Self {
        self.theme_id = Some(theme_id);
        self
    }

    pub fn with_override(mut self, kind: TokenGroupKind, json: impl Into<String>) -> Self {
        self.overrides = self.overrides.with_json(kind, json);
        self
    }
}

/// A theme, either built-in (no owner) or user-created
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeRecord {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub tokens: TokenColumns,
}

impl ThemeRecord {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            user_id: None,
            name: name.into(),
            tokens: TokenColumns::default(),
        }
    }

    /// Built-in themes have no owner.
    pub fn is_system(&self) -> bool {
        self.user_id.is_none()
    }

    pub fn with_owner(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_tokens(mut self, kind: TokenGroupKind, json: impl Into<String>) -> Self {
        self.tokens = self.tokens.with_json(kind, json);
        self
    }
}
