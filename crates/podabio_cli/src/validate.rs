//! Editor-side checks for stored token JSON

use podabio_theme::defaults::keys;
use podabio_theme::mapper::{self, category};
use podabio_theme::{BorderEffect, TokenColumns, TokenGroup, TokenGroupKind};

/// Something wrong with one token column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub group: TokenGroupKind,
    pub message: String,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.group, self.message)
    }
}

/// Check every column present on a record.
pub fn validate_columns(columns: &TokenColumns) -> Vec<Problem> {
    TokenGroupKind::all()
        .iter()
        .filter_map(|kind| columns.column(*kind).map(|json| (*kind, json)))
        .flat_map(|(kind, json)| validate_group(kind, json))
        .collect()
}

/// Strict parse, then flag symbolic values the renderer would not recognise.
pub fn validate_group(kind: TokenGroupKind, json: &str) -> Vec<Problem> {
    let group = match TokenGroup::from_json(json) {
        Ok(group) => group,
        Err(err) => {
            return vec![Problem {
                group: kind,
                message: err.to_string(),
            }]
        }
    };

    selectors(kind)
        .iter()
        .filter_map(|selector| {
            let value = group.get(selector.key)?.as_flat()?;
            (!selector.accepts(&group, value)).then(|| Problem {
                group: kind,
                message: format!("{}: unknown value `{value}`", selector.key),
            })
        })
        .collect()
}

/// A flat token naming an entry of a mapper table, or of a variant map
/// stored alongside it in the same group.
struct Selector {
    key: &'static str,
    table: Option<&'static str>,
    variants_in: Option<&'static str>,
}

impl Selector {
    fn accepts(&self, group: &TokenGroup, value: &str) -> bool {
        let Some(table) = self.table else {
            return BorderEffect::parse(&value.trim().to_ascii_lowercase()).is_some();
        };
        mapper::lookup(table, value).is_some()
            || mapper::is_literal(value)
            || self
                .variants_in
                .and_then(|category| group.get(category))
                .filter(|stored| stored.as_variants().is_some())
                .and_then(|stored| stored.variant(value))
                .is_some()
    }
}

fn selectors(kind: TokenGroupKind) -> &'static [Selector] {
    const SHAPE: [Selector; 4] = [
        Selector {
            key: keys::CORNER,
            table: Some(category::CORNER),
            variants_in: None,
        },
        Selector {
            key: keys::BUTTON_CORNER,
            table: Some(category::CORNER),
            variants_in: Some(keys::CORNER),
        },
        Selector {
            key: keys::BORDER_WIDTH,
            table: Some(category::BORDER_WIDTH),
            variants_in: None,
        },
        Selector {
            key: keys::SPACING,
            table: Some(category::SPACING),
            variants_in: None,
        },
    ];
    const TYPOGRAPHY: [Selector; 1] = [Selector {
        key: keys::SCALE,
        table: Some(category::HEADING_SIZE),
        variants_in: None,
    }];
    const WIDGET: [Selector; 3] = [
        Selector {
            key: keys::BORDER_EFFECT,
            table: None,
            variants_in: None,
        },
        Selector {
            key: keys::BORDER_GLOW_INTENSITY,
            table: Some(category::GLOW_BLUR),
            variants_in: Some(keys::GLOW_BLUR),
        },
        Selector {
            key: keys::BORDER_SHADOW_INTENSITY,
            table: Some(category::SHADOW),
            variants_in: None,
        },
    ];

    match kind {
        TokenGroupKind::Shape => &SHAPE,
        TokenGroupKind::Color => &[],
        TokenGroupKind::Typography => &TYPOGRAPHY,
        TokenGroupKind::Widget => &WIDGET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_values_pass() {
        let problems = validate_group(
            TokenGroupKind::Widget,
            r##"{"border_effect": "Glow", "border_glow_intensity": "pronounced", "glow_color": "#ff00ff"}"##,
        );
        assert_eq!(problems, Vec::new());
    }

    #[test]
    fn unknown_symbols_are_reported() {
        let problems = validate_group(
            TokenGroupKind::Shape,
            r#"{"button_corner": "squircle", "spacing": "roomy", "border_width": "3px"}"#,
        );
        let messages: Vec<String> = problems.iter().map(|p| p.message.clone()).collect();
        assert_eq!(
            messages,
            vec![
                "button_corner: unknown value `squircle`".to_string(),
                "spacing: unknown value `roomy`".to_string(),
            ]
        );
    }

    #[test]
    fn custom_variants_satisfy_selectors() {
        let problems = validate_group(
            TokenGroupKind::Widget,
            r#"{"border_glow_intensity": "blazing", "glow_blur": {"blazing": "32px"}}"#,
        );
        assert!(problems.is_empty());

        let problems = validate_group(
            TokenGroupKind::Shape,
            r#"{"button_corner": "soft", "corner": {"soft": "0.5rem", "md": "0.75rem"}}"#,
        );
        assert!(problems.is_empty());
    }

    #[test]
    fn custom_variants_match_regardless_of_case() {
        let problems = validate_group(
            TokenGroupKind::Widget,
            r#"{"border_glow_intensity": "Halo", "glow_blur": {"HALO": "24px"}}"#,
        );
        assert!(problems.is_empty());

        let problems = validate_group(
            TokenGroupKind::Shape,
            r#"{"button_corner": "Soft", "corner": {"none": "0px"}}"#,
        );
        assert_eq!(problems.len(), 1);
    }

    #[test]
    fn parse_errors_are_reported_once() {
        let problems = validate_group(TokenGroupKind::Color, "{\"background\": ");
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].group, TokenGroupKind::Color);
    }

    #[test]
    fn record_columns_are_checked_individually() {
        let columns = TokenColumns::new()
            .with_json(TokenGroupKind::Widget, r#"{"border_effect": "sparkle"}"#)
            .with_json(TokenGroupKind::Typography, r#"{"scale": "huge"}"#);
        let problems = validate_columns(&columns);
        assert_eq!(problems.len(), 2);
        assert_eq!(
            problems[0].to_string(),
            "typography_tokens: scale: unknown value `huge`"
        );
        assert_eq!(
            problems[1].to_string(),
            "widget_styles: border_effect: unknown value `sparkle`"
        );
    }
}
