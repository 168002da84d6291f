//! Shape tokens: corners, border widths and spacing density

/// Named corner styles for buttons and widgets
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum CornerStyle {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Pill,
}

impl CornerStyle {
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Pill => "pill",
        }
    }

    /// Border radius for this corner style
    pub fn css_value(self) -> &'static str {
        match self {
            Self::None => "0px",
            Self::Sm => "0.375rem",
            Self::Md => "0.75rem",
            Self::Lg => "1.5rem",
            Self::Pill => "9999px",
        }
    }

    pub fn all() -> &'static [CornerStyle] {
        const STYLES: [CornerStyle; 5] = [
            CornerStyle::None,
            CornerStyle::Sm,
            CornerStyle::Md,
            CornerStyle::Lg,
            CornerStyle::Pill,
        ];
        &STYLES
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|style| style.id() == id)
    }
}

/// Widget border thickness
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum BorderWidth {
    None,
    #[default]
    Hairline,
    Thin,
    Thick,
}

impl BorderWidth {
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Hairline => "hairline",
            Self::Thin => "thin",
            Self::Thick => "thick",
        }
    }

    pub fn css_value(self) -> &'static str {
        match self {
            Self::None => "0px",
            Self::Hairline => "1px",
            Self::Thin => "2px",
            Self::Thick => "4px",
        }
    }

    pub fn all() -> &'static [BorderWidth] {
        const WIDTHS: [BorderWidth; 4] = [
            BorderWidth::None,
            BorderWidth::Hairline,
            BorderWidth::Thin,
            BorderWidth::Thick,
        ];
        &WIDTHS
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|width| width.id() == id)
    }
}

/// Vertical spacing between widgets
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Density {
    Tight,
    #[default]
    Comfortable,
    Spacious,
}

impl Density {
    pub fn id(self) -> &'static str {
        match self {
            Self::Tight => "tight",
            Self::Comfortable => "comfortable",
            Self::Spacious => "spacious",
        }
    }

    pub fn css_value(self) -> &'static str {
        match self {
            Self::Tight => "0.5rem",
            Self::Comfortable => "1rem",
            Self::Spacious => "1.5rem",
        }
    }

    pub fn all() -> &'static [Density] {
        const DENSITIES: [Density; 3] = [Density::Tight, Density::Comfortable, Density::Spacious];
        &DENSITIES
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|density| density.id() == id)
    }
}
