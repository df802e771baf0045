//! Nearest-color resolution against the reference palettes.

use crate::distance::DistanceAlgorithm;
use crate::palette::{self, PaletteEntry};
use crate::{ColorDepth, RgbColor};

/// What a requested color becomes at a given depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolved {
    /// The device renders no color.
    None,
    /// Closest palette entry.
    Index(u8),
    /// True-color pass-through.
    Rgb(RgbColor),
}

/// Maps `rgb` to its best representation at `depth`.
///
/// # Example
///
/// ```rust
/// use standout_palette::{distance, resolve, ColorDepth, Resolved, RgbColor};
///
/// let algo = distance::lookup("rgb").unwrap();
/// let sky = RgbColor(84, 192, 233);
/// assert_eq!(resolve(sky, ColorDepth::TrueColor, &algo), Resolved::Rgb(sky));
/// assert_eq!(resolve(sky, ColorDepth::Monochrome, &algo), Resolved::None);
/// assert_eq!(resolve(RgbColor(255, 0, 0), ColorDepth::Ansi256, &algo), Resolved::Index(9));
/// ```
pub fn resolve(rgb: RgbColor, depth: ColorDepth, algorithm: &DistanceAlgorithm) -> Resolved {
    match depth {
        ColorDepth::TrueColor => Resolved::Rgb(rgb),
        ColorDepth::Monochrome => Resolved::None,
        _ => nearest_index(rgb, palette::entries(depth), algorithm)
            .map_or(Resolved::None, Resolved::Index),
    }
}

/// Finds the entry closest to `rgb`, or `None` for an empty palette.
///
/// Entries are compared in order with a strict `<`, so among equally
/// distant candidates the first (lowest index) wins.
pub fn nearest_index(
    rgb: RgbColor,
    entries: &[PaletteEntry],
    algorithm: &DistanceAlgorithm,
) -> Option<u8> {
    let mut min_distance = f64::INFINITY;
    let mut min_index = None;

    for (index, candidate) in entries {
        let distance = algorithm.distance(rgb, *candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(*index);
        }
    }

    if let Some(index) = min_index {
        log::trace!("{} -> palette index {} via {}", rgb, index, algorithm.name());
    }
    min_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance;

    #[test]
    fn test_true_color_passes_through() {
        for algo in distance::algorithms() {
            let sky = RgbColor(84, 192, 233);
            assert_eq!(resolve(sky, ColorDepth::TrueColor, algo), Resolved::Rgb(sky));
        }
    }

    #[test]
    fn test_monochrome_resolves_to_none() {
        for algo in distance::algorithms() {
            assert_eq!(
                resolve(RgbColor(255, 0, 0), ColorDepth::Monochrome, algo),
                Resolved::None
            );
        }
    }

    #[test]
    fn test_black_at_256_is_ansi_black() {
        // Index 0 and cube index 16 are both exact; the lower index wins.
        for algo in distance::algorithms() {
            assert_eq!(
                resolve(RgbColor(0, 0, 0), ColorDepth::Ansi256, algo),
                Resolved::Index(0),
                "{}",
                algo.name()
            );
        }
    }

    #[test]
    fn test_exact_cube_entry_wins() {
        for algo in distance::algorithms() {
            assert_eq!(
                resolve(RgbColor(95, 135, 175), ColorDepth::Ansi256, algo),
                Resolved::Index(67)
            );
        }
    }

    #[test]
    fn test_grayscale_matches_ramp() {
        let algo = distance::RGB;
        assert_eq!(
            resolve(RgbColor(128, 128, 128), ColorDepth::Ansi256, &algo),
            Resolved::Index(244)
        );
    }

    #[test]
    fn test_result_stays_within_depth() {
        let colors = [
            RgbColor(84, 192, 233),
            RgbColor(46, 139, 87),
            RgbColor(250, 128, 114),
        ];
        for algo in distance::algorithms() {
            for depth in [ColorDepth::Ansi4, ColorDepth::Ansi8, ColorDepth::Ansi16] {
                for color in colors {
                    match resolve(color, depth, algo) {
                        Resolved::Index(i) => assert!(u32::from(i) < depth.count()),
                        other => panic!("expected index, got {:?}", other),
                    }
                }
            }
        }
    }

    #[test]
    fn test_four_colors_pick_green() {
        let algo = distance::RGB;
        assert_eq!(
            resolve(RgbColor(0, 190, 10), ColorDepth::Ansi4, &algo),
            Resolved::Index(2)
        );
    }

    #[test]
    fn test_nearest_index_breaks_ties_low() {
        let entries = [
            (3, RgbColor(10, 0, 0)),
            (5, RgbColor(0, 10, 0)),
            (7, RgbColor(0, 0, 10)),
        ];
        let algo = distance::RGB;
        assert_eq!(nearest_index(RgbColor(0, 0, 0), &entries, &algo), Some(3));
    }

    #[test]
    fn test_nearest_index_empty() {
        assert_eq!(nearest_index(RgbColor(0, 0, 0), &[], &distance::RGB), None);
    }
}
