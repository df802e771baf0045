//! Supported terminal color depths.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PaletteError;

/// Number of colors an output device can render.
///
/// The set is closed: only these six depths exist, so once a
/// `ColorDepth` is constructed nothing downstream has to validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ColorDepth {
    /// No color support.
    Monochrome,
    /// 4-color ANSI.
    Ansi4,
    /// 8-color ANSI.
    Ansi8,
    /// 16-color ANSI (8 normal + 8 bright).
    Ansi16,
    /// xterm 256-color palette.
    Ansi256,
    /// 24-bit RGB.
    TrueColor,
}

impl ColorDepth {
    /// Every supported depth, ascending.
    pub const ALL: [ColorDepth; 6] = [
        ColorDepth::Monochrome,
        ColorDepth::Ansi4,
        ColorDepth::Ansi8,
        ColorDepth::Ansi16,
        ColorDepth::Ansi256,
        ColorDepth::TrueColor,
    ];

    /// Color count for true color, `1 << 24`.
    pub const TRUE_COLOR_COUNT: u32 = 1 << 24;

    /// Returns the number of colors this depth renders.
    pub fn count(self) -> u32 {
        match self {
            ColorDepth::Monochrome => 0,
            ColorDepth::Ansi4 => 4,
            ColorDepth::Ansi8 => 8,
            ColorDepth::Ansi16 => 16,
            ColorDepth::Ansi256 => 256,
            ColorDepth::TrueColor => Self::TRUE_COLOR_COUNT,
        }
    }

    /// Validates a raw color count.
    pub fn from_count(count: u32) -> Result<Self, PaletteError> {
        match count {
            0 => Ok(ColorDepth::Monochrome),
            4 => Ok(ColorDepth::Ansi4),
            8 => Ok(ColorDepth::Ansi8),
            16 => Ok(ColorDepth::Ansi16),
            256 => Ok(ColorDepth::Ansi256),
            Self::TRUE_COLOR_COUNT => Ok(ColorDepth::TrueColor),
            other => Err(PaletteError::InvalidDepth(other)),
        }
    }

    /// Returns `true` when palette index `index` can be emitted directly.
    ///
    /// True-color terminals accept the whole 256-color index range.
    pub fn supports_index(self, index: u8) -> bool {
        match self {
            ColorDepth::Monochrome => false,
            ColorDepth::Ansi256 | ColorDepth::TrueColor => true,
            depth => u32::from(index) < depth.count(),
        }
    }
}

impl Default for ColorDepth {
    fn default() -> Self {
        ColorDepth::Ansi256
    }
}

impl TryFrom<u32> for ColorDepth {
    type Error = PaletteError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::from_count(count)
    }
}

impl From<ColorDepth> for u32 {
    fn from(depth: ColorDepth) -> Self {
        depth.count()
    }
}

impl fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}
