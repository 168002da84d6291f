//! Built-in system themes.

use crate::defaults::keys;
use crate::record::ThemeRecord;
use crate::tokens::{TokenGroup, TokenGroupKind, TokenValue};
use std::fmt::{Display, Formatter};

/// Built-in theme catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Light, rounded, no border effect.
    Classic,
    /// Dark surfaces with pill buttons.
    Midnight,
    /// Dark surfaces with a pronounced glow.
    Neon,
    /// Square corners and hairline borders.
    Minimal,
    /// Raised cards with a drop shadow.
    Studio,
}

impl ThemePreset {
    /// Stable preset id for config and the command line.
    pub fn id(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Midnight => "midnight",
            Self::Neon => "neon",
            Self::Minimal => "minimal",
            Self::Studio => "studio",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Midnight => "Midnight",
            Self::Neon => "Neon",
            Self::Minimal => "Minimal",
            Self::Studio => "Studio",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 5] = [
            ThemePreset::Classic,
            ThemePreset::Midnight,
            ThemePreset::Neon,
            ThemePreset::Minimal,
            ThemePreset::Studio,
        ];
        &PRESETS
    }

    pub fn parse(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(id))
    }

    /// Theme id the preset is stored under.
    pub fn theme_id(self) -> i64 {
        match self {
            Self::Classic => 1,
            Self::Midnight => 2,
            Self::Neon => 3,
            Self::Minimal => 4,
            Self::Studio => 5,
        }
    }

    /// Token group of this preset.
    pub fn group(self, kind: TokenGroupKind) -> TokenGroup {
        match kind {
            TokenGroupKind::Shape => self.shape(),
            TokenGroupKind::Color => self.color(),
            TokenGroupKind::Typography => self.typography(),
            TokenGroupKind::Widget => self.widget(),
        }
    }

    /// Build the system theme record for this preset.
    pub fn record(self) -> ThemeRecord {
        TokenGroupKind::all().iter().fold(
            ThemeRecord::new(self.theme_id(), self.display_name()),
            |theme, kind| theme.with_tokens(*kind, self.group(*kind).to_json()),
        )
    }

    fn shape(self) -> TokenGroup {
        let (button_corner, border_width, spacing) = match self {
            Self::Classic => ("md", "hairline", "comfortable"),
            Self::Midnight => ("pill", "hairline", "comfortable"),
            Self::Neon => ("lg", "thin", "spacious"),
            Self::Minimal => ("none", "hairline", "tight"),
            Self::Studio => ("sm", "none", "spacious"),
        };
        let shape = TokenGroup::new()
            .with(keys::BUTTON_CORNER, TokenValue::flat(button_corner))
            .with(keys::BORDER_WIDTH, TokenValue::flat(border_width))
            .with(keys::SPACING, TokenValue::flat(spacing));

        // Minimal ships only the square corner; other presets use the default table.
        match self {
            Self::Minimal => shape.with(keys::CORNER, TokenValue::variants([("none", "0px")])),
            _ => shape,
        }
    }

    fn color(self) -> TokenGroup {
        let palette = match self {
            Self::Classic => Palette {
                page: "#ffffff",
                widget: "#f8fafc",
                border: "#e2e8f0",
                accent: "#6366f1",
            },
            Self::Midnight => Palette {
                page: "#0f172a",
                widget: "#1e293b",
                border: "#334155",
                accent: "#38bdf8",
            },
            Self::Neon => Palette {
                page: "#09090b",
                widget: "#18181b",
                border: "#a855f7",
                accent: "#ff00ff",
            },
            Self::Minimal => Palette {
                page: "#fafafa",
                widget: "#ffffff",
                border: "#171717",
                accent: "#171717",
            },
            Self::Studio => Palette {
                page: "#f4f4f5",
                widget: "#ffffff",
                border: "#e4e4e7",
                accent: "#f97316",
            },
        };

        TokenGroup::new()
            .with(
                keys::BACKGROUND,
                TokenValue::variants([(keys::PAGE, palette.page), (keys::WIDGET, palette.widget)]),
            )
            .with(
                keys::BORDER,
                TokenValue::variants([(keys::WIDGET, palette.border)]),
            )
            .with(
                keys::ACCENT,
                TokenValue::variants([(keys::PRIMARY, palette.accent)]),
            )
    }

    fn typography(self) -> TokenGroup {
        let (font, heading, body, scale) = match self {
            Self::Classic => (SANS, "#0f172a", "#334155", "standard"),
            Self::Midnight => (SANS, "#f8fafc", "#cbd5e1", "standard"),
            Self::Neon => (MONO, "#fdf4ff", "#e4e4e7", "large"),
            Self::Minimal => (SANS, "#171717", "#404040", "compact"),
            Self::Studio => (SERIF, "#18181b", "#3f3f46", "large"),
        };

        TokenGroup::new()
            .with(keys::FONT, TokenValue::flat(font))
            .with(
                keys::COLOR,
                TokenValue::variants([(keys::HEADING, heading), (keys::BODY, body)]),
            )
            .with(keys::SCALE, TokenValue::flat(scale))
    }

    fn widget(self) -> TokenGroup {
        let widget = TokenGroup::new();
        match self {
            Self::Classic | Self::Minimal => {
                widget.with(keys::BORDER_EFFECT, TokenValue::flat("none"))
            }
            Self::Midnight => widget
                .with(keys::BORDER_EFFECT, TokenValue::flat("glow"))
                .with(keys::BORDER_GLOW_INTENSITY, TokenValue::flat("subtle"))
                .with(keys::GLOW_COLOR, TokenValue::flat("#38bdf8")),
            Self::Neon => widget
                .with(keys::BORDER_EFFECT, TokenValue::flat("glow"))
                .with(keys::BORDER_GLOW_INTENSITY, TokenValue::flat("pronounced"))
                .with(keys::GLOW_COLOR, TokenValue::flat("#ff00ff")),
            Self::Studio => widget
                .with(keys::BORDER_EFFECT, TokenValue::flat("shadow"))
                .with(keys::BORDER_SHADOW_INTENSITY, TokenValue::flat("pronounced")),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_theme(preset: ThemePreset) -> ThemeRecord {
    preset.record()
}

const SANS: &str = "'Inter', system-ui, -apple-system, sans-serif";
const SERIF: &str = "'Fraunces', Georgia, serif";
const MONO: &str = "'JetBrains Mono', ui-monospace, monospace";

struct Palette {
    page: &'static str,
    widget: &'static str,
    border: &'static str,
    accent: &'static str,
}
