//! Typography tokens

/// Type scale applied to headings and body text together
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum TypeScale {
    Compact,
    #[default]
    Standard,
    Large,
}

impl TypeScale {
    pub fn id(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Standard => "standard",
            Self::Large => "large",
        }
    }

    pub fn heading_size(self) -> &'static str {
        match self {
            Self::Compact => "1.5rem",
            Self::Standard => "2rem",
            Self::Large => "2.5rem",
        }
    }

    pub fn body_size(self) -> &'static str {
        match self {
            Self::Compact => "0.875rem",
            Self::Standard => "1rem",
            Self::Large => "1.125rem",
        }
    }

    pub fn all() -> &'static [TypeScale] {
        const SCALES: [TypeScale; 3] = [TypeScale::Compact, TypeScale::Standard, TypeScale::Large];
        &SCALES
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|scale| scale.id() == id)
    }
}
