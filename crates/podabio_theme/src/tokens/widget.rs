//! Widget style tokens: border effects, glow and shadow intensity

use std::fmt::{Display, Formatter};

/// Decorative effect drawn around widgets
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum BorderEffect {
    #[default]
    None,
    Shadow,
    Glow,
}

impl BorderEffect {
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Shadow => "shadow",
            Self::Glow => "glow",
        }
    }

    pub fn all() -> &'static [BorderEffect] {
        const EFFECTS: [BorderEffect; 3] =
            [BorderEffect::None, BorderEffect::Shadow, BorderEffect::Glow];
        &EFFECTS
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|effect| effect.id() == id)
    }
}

impl Display for BorderEffect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Strength of the glow effect
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum GlowIntensity {
    #[default]
    Subtle,
    Pronounced,
}

impl GlowIntensity {
    pub fn id(self) -> &'static str {
        match self {
            Self::Subtle => "subtle",
            Self::Pronounced => "pronounced",
        }
    }

    /// Blur radius of the glow shadow
    pub fn blur(self) -> &'static str {
        match self {
            Self::Subtle => "8px",
            Self::Pronounced => "16px",
        }
    }

    /// Opacity of the glow color at rest
    pub fn opacity(self) -> &'static str {
        match self {
            Self::Subtle => "0.5",
            Self::Pronounced => "0.8",
        }
    }

    pub fn all() -> &'static [GlowIntensity] {
        const INTENSITIES: [GlowIntensity; 2] = [GlowIntensity::Subtle, GlowIntensity::Pronounced];
        &INTENSITIES
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|intensity| intensity.id() == id)
    }
}

/// Static drop shadow level used by the `shadow` border effect
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ShadowLevel {
    #[default]
    None,
    Subtle,
    Pronounced,
}

impl ShadowLevel {
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Subtle => "subtle",
            Self::Pronounced => "pronounced",
        }
    }

    pub fn css_value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Subtle => "0 1px 3px rgba(15, 23, 42, 0.12)",
            Self::Pronounced => "0 10px 25px rgba(15, 23, 42, 0.18)",
        }
    }

    pub fn all() -> &'static [ShadowLevel] {
        const LEVELS: [ShadowLevel; 3] =
            [ShadowLevel::None, ShadowLevel::Subtle, ShadowLevel::Pronounced];
        &LEVELS
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|level| level.id() == id)
    }
}
