use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Hue step between neighbouring characters in rainbow mode, in degrees.
pub const RAINBOW_HUE_STEP: f64 = 57.0;
const RAINBOW_SATURATION: f64 = 0.8;
const RAINBOW_LIGHTNESS: f64 = 0.6;

/// An opaque sRGB color written as `#RRGGBB` in snapshots and CSS.
///
/// Parsing accepts the CSS short form `#RGB`, which expands each digit
/// (`#333` is `#333333`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert HSL (hue in degrees, saturation and lightness in `0..=1`).
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// CSS `rgba(r,g,b,a)` with the alpha written to three decimals.
    pub fn to_css_rgba(self, alpha: f64) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, alpha)
    }
}

impl FromStr for HexColor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidColor(s.to_string());
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };
        let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
        Ok(Self::rgb(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Per-character color used in rainbow mode: `hsl(index * 57, 80%, 60%)`.
pub fn rainbow_color(index: usize) -> HexColor {
    HexColor::from_hsl(
        index as f64 * RAINBOW_HUE_STEP,
        RAINBOW_SATURATION,
        RAINBOW_LIGHTNESS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_form() {
        let c: HexColor = "#F8DB28".parse().unwrap();
        assert_eq!(c, HexColor::rgb(0xF8, 0xDB, 0x28));
    }

    #[test]
    fn parse_is_case_insensitive() {
        let upper: HexColor = "#A0E7E5".parse().unwrap();
        let lower: HexColor = "#a0e7e5".parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn parse_short_form_expands() {
        let c: HexColor = "#333".parse().unwrap();
        assert_eq!(c, HexColor::rgb(0x33, 0x33, 0x33));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("#12".parse::<HexColor>().is_err());
        assert!("#GGGGGG".parse::<HexColor>().is_err());
        assert!("".parse::<HexColor>().is_err());
        assert!("#1234567".parse::<HexColor>().is_err());
    }

    #[test]
    fn display_is_uppercase_long_form() {
        assert_eq!(HexColor::rgb(0x5e, 0x31, 0x43).to_string(), "#5E3143");
    }

    #[test]
    fn serde_uses_hex_string() {
        let json = serde_json::to_string(&HexColor::rgb(255, 0, 16)).unwrap();
        assert_eq!(json, "\"#FF0010\"");
        let back: HexColor = serde_json::from_str("\"#ff0010\"").unwrap();
        assert_eq!(back, HexColor::rgb(255, 0, 16));
        assert!(serde_json::from_str::<HexColor>("\"red\"").is_err());
    }

    #[test]
    fn css_rgba_has_three_decimals() {
        assert_eq!(HexColor::rgb(1, 2, 3).to_css_rgba(0.5), "rgba(1,2,3,0.500)");
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(HexColor::from_hsl(0.0, 1.0, 0.5), HexColor::rgb(255, 0, 0));
        assert_eq!(HexColor::from_hsl(120.0, 1.0, 0.5), HexColor::rgb(0, 255, 0));
        assert_eq!(HexColor::from_hsl(240.0, 1.0, 0.5), HexColor::rgb(0, 0, 255));
        assert_eq!(HexColor::from_hsl(360.0, 1.0, 0.5), HexColor::rgb(255, 0, 0));
    }

    #[test]
    fn rainbow_first_character_is_red_ish() {
        assert_eq!(rainbow_color(0), HexColor::rgb(235, 71, 71));
    }

    #[test]
    fn rainbow_neighbours_differ() {
        assert_ne!(rainbow_color(0), rainbow_color(1));
        assert_ne!(rainbow_color(1), rainbow_color(2));
    }
}
