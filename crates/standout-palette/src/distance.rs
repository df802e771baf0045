//! Color distance algorithms.
//!
//! Every algorithm is a plain function from two [`RgbColor`]s to a
//! non-negative `f64`, registered under a stable name:
//!
//! | Name           | Measure                                         |
//! |----------------|-------------------------------------------------|
//! | `rgb`          | Euclidean distance in RGB                       |
//! | `rgb-weighted` | Red-mean weighted RGB distance                  |
//! | `cie76`        | Euclidean distance in CIE LAB                   |
//! | `cie94`        | CIE94 (graphic arts weights)                    |
//! | `cie2000`      | CIEDE2000                                       |
//!
//! [`DistanceAlgorithm::distance`] guarantees `d(x, x) == 0` and
//! `d(x, y) > 0` for `x != y`, whatever the underlying formula does with
//! very small differences.
//!
//! `rgb`, `rgb-weighted` and `cie76` are symmetric. `cie94` is not: its
//! weighting uses the chroma of the first argument as the reference.
//!
//! # Example
//!
//! ```rust
//! use standout_palette::{distance, RgbColor};
//!
//! let rgb = distance::lookup("rgb").unwrap();
//! assert_eq!(rgb.distance(RgbColor(0, 0, 0), RgbColor(0, 0, 0)), 0.0);
//! assert_eq!(rgb.distance(RgbColor(0, 0, 0), RgbColor(3, 4, 0)), 5.0);
//! ```

use std::fmt;

use crate::colorspace::{rgb_to_lab, Lab};
use crate::RgbColor;

/// Signature shared by all distance formulas.
pub type DistanceFn = fn(RgbColor, RgbColor) -> f64;

/// Algorithm selected when nothing else is configured.
pub const DEFAULT_ALGORITHM: &str = "cie2000";

/// A named distance formula.
#[derive(Clone, Copy)]
pub struct DistanceAlgorithm {
    name: &'static str,
    compute: DistanceFn,
}

impl DistanceAlgorithm {
    pub const fn new(name: &'static str, compute: DistanceFn) -> Self {
        Self { name, compute }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Measures the distance from `a` to `b`.
    pub fn distance(&self, a: RgbColor, b: RgbColor) -> f64 {
        if a == b {
            return 0.0;
        }
        let d = (self.compute)(a, b);
        // Distinct colors never measure zero (this also catches NaN).
        if d > 0.0 {
            d
        } else {
            f64::MIN_POSITIVE
        }
    }
}

impl fmt::Debug for DistanceAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DistanceAlgorithm").field(&self.name).finish()
    }
}

impl PartialEq for DistanceAlgorithm {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for DistanceAlgorithm {}

impl Default for DistanceAlgorithm {
    fn default() -> Self {
        CIE2000
    }
}

pub const RGB: DistanceAlgorithm = DistanceAlgorithm::new("rgb", dist_rgb);
pub const RGB_WEIGHTED: DistanceAlgorithm = DistanceAlgorithm::new("rgb-weighted", dist_rgb_weighted);
pub const CIE76: DistanceAlgorithm = DistanceAlgorithm::new("cie76", dist_cie76);
pub const CIE94: DistanceAlgorithm = DistanceAlgorithm::new("cie94", dist_cie94);
pub const CIE2000: DistanceAlgorithm = DistanceAlgorithm::new("cie2000", dist_cie2000);

static ALGORITHMS: [DistanceAlgorithm; 5] = [RGB, RGB_WEIGHTED, CIE76, CIE94, CIE2000];

/// All registered algorithms, in registration order.
pub fn algorithms() -> &'static [DistanceAlgorithm] {
    &ALGORITHMS
}

/// Names of all registered algorithms, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ALGORITHMS.iter().map(DistanceAlgorithm::name)
}

/// Looks up an algorithm by its registered name.
pub fn lookup(name: &str) -> Option<DistanceAlgorithm> {
    ALGORITHMS.iter().copied().find(|algo| algo.name == name)
}

// ─── RGB formulas ───────────────────────────────────────────────────────────

fn channel_deltas(a: RgbColor, b: RgbColor) -> (f64, f64, f64) {
    (
        a.0 as f64 - b.0 as f64,
        a.1 as f64 - b.1 as f64,
        a.2 as f64 - b.2 as f64,
    )
}

fn dist_rgb(a: RgbColor, b: RgbColor) -> f64 {
    let (dr, dg, db) = channel_deltas(a, b);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Red-mean approximation: red and blue weights follow the mean red level.
fn dist_rgb_weighted(a: RgbColor, b: RgbColor) -> f64 {
    let (dr, dg, db) = channel_deltas(a, b);
    let red_mean = (a.0 as f64 + b.0 as f64) / 2.0;
    let wr = 2.0 + red_mean / 256.0;
    let wb = 2.0 + (255.0 - red_mean) / 256.0;
    (wr * dr * dr + 4.0 * dg * dg + wb * db * db).sqrt()
}

// ─── LAB formulas ───────────────────────────────────────────────────────────

fn dist_cie76(a: RgbColor, b: RgbColor) -> f64 {
    delta_e_76(&rgb_to_lab(a), &rgb_to_lab(b))
}

fn dist_cie94(a: RgbColor, b: RgbColor) -> f64 {
    delta_e_94(&rgb_to_lab(a), &rgb_to_lab(b))
}

fn dist_cie2000(a: RgbColor, b: RgbColor) -> f64 {
    delta_e_2000(&rgb_to_lab(a), &rgb_to_lab(b))
}

fn delta_e_76(x: &Lab, y: &Lab) -> f64 {
    let dl = x.l - y.l;
    let da = x.a - y.a;
    let db = x.b - y.b;
    (dl * dl + da * da + db * db).sqrt()
}

fn delta_e_94(x: &Lab, y: &Lab) -> f64 {
    const K1: f64 = 0.045;
    const K2: f64 = 0.015;

    let c1 = x.chroma();
    let c2 = y.chroma();
    let dl = x.l - y.l;
    let dc = c1 - c2;
    let da = x.a - y.a;
    let db = x.b - y.b;
    let dh_sq = (da * da + db * db - dc * dc).max(0.0);

    let sc = 1.0 + K1 * c1;
    let sh = 1.0 + K2 * c1;

    (dl * dl + (dc / sc).powi(2) + dh_sq / (sh * sh)).sqrt()
}

/// Hue angle in degrees, normalized to `[0, 360)`.
fn hue_degrees(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

fn delta_e_2000(x: &Lab, y: &Lab) -> f64 {
    let pow25_7 = 25f64.powi(7);

    let c_bar = (x.chroma() + y.chroma()) / 2.0;
    let c_bar7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + pow25_7)).sqrt());

    let a1p = (1.0 + g) * x.a;
    let a2p = (1.0 + g) * y.a;
    let c1p = a1p.hypot(x.b);
    let c2p = a2p.hypot(y.b);
    let h1p = hue_degrees(x.b, a1p);
    let h2p = hue_degrees(y.b, a2p);

    let dlp = y.l - x.l;
    let dcp = c2p - c1p;
    let chroma_product = c1p * c2p;

    let dhp = if chroma_product == 0.0 {
        0.0
    } else {
        let d = h2p - h1p;
        if d > 180.0 {
            d - 360.0
        } else if d < -180.0 {
            d + 360.0
        } else {
            d
        }
    };
    let dhp_big = 2.0 * chroma_product.sqrt() * (dhp / 2.0).to_radians().sin();

    let lbp = (x.l + y.l) / 2.0;
    let cbp = (c1p + c2p) / 2.0;
    let hbp = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() > 180.0 {
        if h1p + h2p < 360.0 {
            (h1p + h2p + 360.0) / 2.0
        } else {
            (h1p + h2p - 360.0) / 2.0
        }
    } else {
        (h1p + h2p) / 2.0
    };

    let t = 1.0 - 0.17 * (hbp - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hbp).to_radians().cos()
        + 0.32 * (3.0 * hbp + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hbp - 63.0).to_radians().cos();

    let d_theta = 30.0 * (-((hbp - 275.0) / 25.0).powi(2)).exp();
    let cbp7 = cbp.powi(7);
    let rc = 2.0 * (cbp7 / (cbp7 + pow25_7)).sqrt();
    let lbp_offset = (lbp - 50.0).powi(2);
    let sl = 1.0 + 0.015 * lbp_offset / (20.0 + lbp_offset).sqrt();
    let sc = 1.0 + 0.045 * cbp;
    let sh = 1.0 + 0.015 * cbp * t;
    let rt = -(2.0 * d_theta).to_radians().sin() * rc;

    let l_term = dlp / sl;
    let c_term = dcp / sc;
    let h_term = dhp_big / sh;

    (l_term * l_term + c_term * c_term + h_term * h_term + rt * c_term * h_term)
        .max(0.0)
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [RgbColor; 3] = [
        RgbColor(0, 0, 0),
        RgbColor(255, 255, 255),
        RgbColor(55, 234, 102),
    ];

    const DISTINCT_PAIRS: [(RgbColor, RgbColor); 3] = [
        (RgbColor(0, 0, 0), RgbColor(0, 0, 1)),
        (RgbColor(25, 30, 4), RgbColor(4, 30, 25)),
        (RgbColor(200, 200, 200), RgbColor(100, 100, 101)),
    ];

    #[test]
    fn test_registry_names() {
        let names: Vec<_> = names().collect();
        assert_eq!(names, vec!["rgb", "rgb-weighted", "cie76", "cie94", "cie2000"]);
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("EenieMeenieMineyMo").is_none());
        assert_eq!(lookup("cie76"), Some(CIE76));
    }

    #[test]
    fn test_default_is_registered() {
        assert_eq!(lookup(DEFAULT_ALGORITHM), Some(DistanceAlgorithm::default()));
    }

    #[test]
    fn test_same_color_has_zero_distance() {
        for algo in algorithms() {
            for color in SAMPLES {
                assert_eq!(algo.distance(color, color), 0.0, "{}", algo.name());
            }
        }
    }

    #[test]
    fn test_different_colors_have_positive_distance() {
        for algo in algorithms() {
            for (a, b) in DISTINCT_PAIRS {
                assert!(algo.distance(a, b) > 0.0, "{} {:?} {:?}", algo.name(), a, b);
            }
        }
    }

    #[test]
    fn test_rgb_is_euclidean() {
        assert_eq!(RGB.distance(RgbColor(0, 0, 0), RgbColor(3, 4, 0)), 5.0);
    }

    #[test]
    fn test_raw_formulas_agree_on_identity() {
        let c = RgbColor(55, 234, 102);
        assert_eq!(dist_cie76(c, c), 0.0);
        assert_eq!(dist_cie94(c, c), 0.0);
        assert_eq!(dist_cie2000(c, c), 0.0);
    }

    #[test]
    fn test_cie2000_reference_pair() {
        // Sharma et al. test data, pair 1.
        let x = Lab { l: 50.0, a: 2.6772, b: -79.7751 };
        let y = Lab { l: 50.0, a: 0.0, b: -82.7485 };
        let d = delta_e_2000(&x, &y);
        assert!((d - 2.0425).abs() < 1e-4, "got {}", d);
    }

    #[test]
    fn test_cie2000_neutral_pair() {
        // Sharma et al. test data, pair 7: both on the neutral axis.
        let x = Lab { l: 50.0, a: 0.0, b: 0.0 };
        let y = Lab { l: 50.0, a: -1.0, b: 2.0 };
        let d = delta_e_2000(&x, &y);
        assert!((d - 2.3669).abs() < 1e-4, "got {}", d);
    }

    #[test]
    fn test_cie94_weights_follow_first_argument() {
        let saturated = RgbColor(255, 0, 0);
        let muted = RgbColor(128, 64, 64);
        let forward = CIE94.distance(saturated, muted);
        let backward = CIE94.distance(muted, saturated);
        assert!(forward > 0.0 && backward > 0.0);
        assert!((forward - backward).abs() > 1e-9);
    }
}
