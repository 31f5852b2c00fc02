use derive_more::{Deref, From, Into};
use palette::{Srgb, Srgba};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Invalid hex color '{0}'")]
    InvalidHex(String),
    #[error("Unknown color name '{0}'")]
    UnknownName(String),
}

/// An sRGB color with alpha, written as `#rgb`, `#rrggbb`, `#rrggbbaa` or a CSS name.
#[derive(Debug, Clone, Copy, PartialEq, Deref, From, Into, SerializeDisplay, DeserializeFromStr)]
pub struct Color(Srgba<f64>);

impl Color {
    pub const BLACK: Color = Color(Srgba::new(0.0, 0.0, 0.0, 1.0));

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self(Srgba::new(r, g, b, a))
    }

    pub fn components(&self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }

    fn from_rgb8(rgb: Srgb<u8>, alpha: u8) -> Self {
        let rgb: Srgb<f64> = rgb.into_format();
        Self(Srgba::new(
            rgb.red,
            rgb.green,
            rgb.blue,
            alpha as f64 / 255.0,
        ))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix('#') else {
            return palette::named::from_str(&s.to_ascii_lowercase())
                .map(|rgb| Self::from_rgb8(rgb, u8::MAX))
                .ok_or_else(|| ColorParseError::UnknownName(s.to_string()));
        };

        let invalid = || ColorParseError::InvalidHex(s.to_string());
        if !hex.is_ascii() {
            return Err(invalid());
        }
        match hex.len() {
            3 | 6 => Srgb::<u8>::from_str(hex)
                .map(|rgb| Self::from_rgb8(rgb, u8::MAX))
                .map_err(|_| invalid()),
            8 => {
                let rgb = Srgb::<u8>::from_str(&hex[..6]).map_err(|_| invalid())?;
                let alpha = u8::from_str_radix(&hex[6..], 16).map_err(|_| invalid())?;
                Ok(Self::from_rgb8(rgb, alpha))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.components();
        let to_u8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            to_u8(r),
            to_u8(g),
            to_u8(b),
            to_u8(a)
        )
    }
}
