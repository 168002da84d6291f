//! Color helpers for stored CSS color strings

use std::fmt::{Display, Formatter};

/// An opaque sRGB color parsed from a CSS hex literal
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn parse_hex(value: &str) -> Option<Self> {
        let digits = value.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let mut channels = digits.chars().map(|c| {
                    let v = c.to_digit(16).unwrap_or(0) as u8;
                    v * 17
                });
                Some(Self::new(
                    channels.next()?,
                    channels.next()?,
                    channels.next()?,
                ))
            }
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_hex),
            _ => None,
        }
    }

    /// `rgba(...)` with the given alpha text, e.g. `"0.5"`.
    pub fn to_rgba(self, alpha: &str) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Apply an opacity to an arbitrary CSS color.
///
/// Hex colors become `rgba(...)`; any other syntax (named colors, `var()`,
/// `hsl()`) is wrapped in `color-mix` so the result stays valid CSS.
pub fn with_opacity(color: &str, opacity: &str) -> String {
    if let Some(rgb) = Rgb::parse_hex(color) {
        return rgb.to_rgba(opacity);
    }

    let percent = opacity
        .parse::<f32>()
        .map(|o| (o.clamp(0.0, 1.0) * 100.0).round() as u32)
        .unwrap_or(100);
    format!("color-mix(in srgb, {color} {percent}%, transparent)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb::parse_hex("#ff00ff"), Some(Rgb::new(255, 0, 255)));
        assert_eq!(Rgb::parse_hex("#F0a"), Some(Rgb::new(255, 0, 170)));
        assert_eq!(Rgb::parse_hex("ff00ff"), None);
        assert_eq!(Rgb::parse_hex("#ff00f"), None);
        assert_eq!(Rgb::parse_hex("#gg0000"), None);
    }

    #[test]
    fn displays_as_lowercase_hex() {
        assert_eq!(Rgb::from_hex(0x1E66F5).to_string(), "#1e66f5");
    }

    #[test]
    fn opacity_on_hex_uses_rgba() {
        assert_eq!(with_opacity("#ff00ff", "0.8"), "rgba(255, 0, 255, 0.8)");
    }

    #[test]
    fn opacity_on_other_syntax_uses_color_mix() {
        assert_eq!(
            with_opacity("rebeccapurple", "0.5"),
            "color-mix(in srgb, rebeccapurple 50%, transparent)"
        );
        assert_eq!(
            with_opacity("var(--accent-color)", "oops"),
            "color-mix(in srgb, var(--accent-color) 100%, transparent)"
        );
    }
}
