//! Reference palettes for each color depth.
//!
//! The RGB values here are approximations used only for distance comparison;
//! terminals are free to render the indexed colors differently.
//!
//! The 256-color table is generated from the xterm formulas:
//!
//! | Indices  | Content                                                   |
//! |----------|-----------------------------------------------------------|
//! | 0–15     | ANSI colors (xterm defaults)                              |
//! | 16–231   | 6×6×6 cube, `16 + 36r + 6g + b`, levels [`CUBE_LEVELS`]   |
//! | 232–255  | grayscale ramp, `8 + 10 * step`                           |
//!
//! The 4-, 8- and 16-color palettes are prefixes of the same table, so an
//! entry's position always equals its index.

use once_cell::sync::Lazy;

use crate::{ColorDepth, RgbColor};

/// A palette index paired with its approximate RGB value.
pub type PaletteEntry = (u8, RgbColor);

/// xterm's default ANSI colors, black through bright white.
pub const ANSI_COLORS: [RgbColor; 16] = [
    RgbColor(0, 0, 0),       // black
    RgbColor(205, 0, 0),     // red
    RgbColor(0, 205, 0),     // green
    RgbColor(205, 205, 0),   // yellow
    RgbColor(0, 0, 238),     // blue
    RgbColor(205, 0, 205),   // magenta
    RgbColor(0, 205, 205),   // cyan
    RgbColor(229, 229, 229), // white
    RgbColor(127, 127, 127), // bright black
    RgbColor(255, 0, 0),     // bright red
    RgbColor(0, 255, 0),     // bright green
    RgbColor(255, 255, 0),   // bright yellow
    RgbColor(92, 92, 255),   // bright blue
    RgbColor(255, 0, 255),   // bright magenta
    RgbColor(0, 255, 255),   // bright cyan
    RgbColor(255, 255, 255), // bright white
];

/// Per-axis channel levels of the 6×6×6 color cube.
pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Number of steps in the grayscale ramp.
pub const GRAYSCALE_STEPS: u8 = 24;

static TABLE_256: Lazy<Vec<PaletteEntry>> = Lazy::new(generate_256);

fn generate_256() -> Vec<PaletteEntry> {
    let mut table = Vec::with_capacity(256);

    for (index, color) in ANSI_COLORS.iter().enumerate() {
        table.push((index as u8, *color));
    }

    // Color cube
    for r in 0..6u8 {
        for g in 0..6u8 {
            for b in 0..6u8 {
                let index = 16 + 36 * r + 6 * g + b;
                let color = RgbColor(
                    CUBE_LEVELS[r as usize],
                    CUBE_LEVELS[g as usize],
                    CUBE_LEVELS[b as usize],
                );
                table.push((index, color));
            }
        }
    }

    // Grayscale ramp
    for step in 0..GRAYSCALE_STEPS {
        let level = 8 + 10 * step;
        table.push((232 + step, RgbColor(level, level, level)));
    }

    table
}

/// Returns the reference palette for `depth`, lowest index first.
///
/// Monochrome and true color have no palette and return an empty slice.
pub fn entries(depth: ColorDepth) -> &'static [PaletteEntry] {
    let table = TABLE_256.as_slice();
    match depth {
        ColorDepth::Monochrome | ColorDepth::TrueColor => &[],
        ColorDepth::Ansi4 => &table[..4],
        ColorDepth::Ansi8 => &table[..8],
        ColorDepth::Ansi16 => &table[..16],
        ColorDepth::Ansi256 => table,
    }
}

/// Returns the approximate RGB value of a 256-color palette index.
pub fn rgb_for_index(index: u8) -> RgbColor {
    TABLE_256[index as usize].1
}
