//! RGB color values with hex (de)serialization.
//!
//! [`RgbColor`] is the value every other module works with: palette entries,
//! distance algorithm inputs and true-color pass-through results.
//!
//! # Example
//!
//! ```rust
//! use standout_palette::RgbColor;
//!
//! let color = RgbColor(0x5a, 0x05, 0xcb);
//! assert_eq!(color.to_hex(), "#5a05cb");
//! assert_eq!(RgbColor::from_hex("#5a05cb").unwrap(), color);
//! assert_eq!(RgbColor::from_hex("fff").unwrap(), RgbColor(255, 255, 255));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::PaletteError;

/// An immutable red, green, blue triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Creates a color from floating-point channels, clamping each to 0–255.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    pub fn r(&self) -> u8 {
        self.0
    }

    pub fn g(&self) -> u8 {
        self.1
    }

    pub fn b(&self) -> u8 {
        self.2
    }

    /// Returns the channels as an array, in r, g, b order.
    pub fn channels(&self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }

    /// Formats the color as `#rrggbb`, lowercase and zero-padded.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    pub fn from_hex(s: &str) -> Result<Self, PaletteError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || PaletteError::InvalidHex(s.to_string());

        if !hex.is_ascii() {
            return Err(invalid());
        }

        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => {
                let digit = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
                Ok(Self(pair(0)?, pair(2)?, pair(4)?))
            }
            _ => Err(invalid()),
        }
    }
}

fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self(r, g, b)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self(r, g, b)
    }
}

impl From<RgbColor> for (u8, u8, u8) {
    fn from(color: RgbColor) -> Self {
        (color.0, color.1, color.2)
    }
}

impl IntoIterator for RgbColor {
    type Item = u8;
    type IntoIter = std::array::IntoIter<u8, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels().into_iter()
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Accepted serialized forms: a hex string or an `[r, g, b]` sequence.
#[derive(Deserialize)]
#[serde(untagged)]
enum RgbRepr {
    Hex(String),
    Channels([u8; 3]),
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RgbRepr::deserialize(deserializer)? {
            RgbRepr::Hex(s) => RgbColor::from_hex(&s).map_err(serde::de::Error::custom),
            RgbRepr::Channels(channels) => Ok(channels.into()),
        }
    }
}
