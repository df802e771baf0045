//! # Standout Palette - Depth-Aware Terminal Colors
//!
//! `standout-palette` resolves color and style requests into whatever the
//! output device can actually render: true color, the xterm 256-color
//! palette, 16/8/4 ANSI colors, or nothing at all.
//!
//! ## Core Concepts
//!
//! - [`RgbColor`]: immutable RGB value with `#rrggbb` (de)serialization
//! - [`distance`]: registry of named color distance algorithms
//! - [`palette`]: reference palettes per [`ColorDepth`]
//! - [`resolve()`]: nearest palette entry, true-color pass-through, or none
//! - [`Session`]: depth, algorithm and a cache of resolved [`Formatter`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_palette::{Formatter, Session};
//!
//! let mut session = Session::new();
//!
//! // Compound names combine attributes, a foreground and an `on_` background.
//! let title = session.formatter("bold_on_seagreen");
//! assert!(title.wrap("Report").starts_with("\x1b[1m"));
//!
//! // Unknown names never fail; they resolve to a no-op wrapper.
//! assert_eq!(session.formatter("csr"), Formatter::Null);
//! assert_eq!(session.formatter("csr").wrap("smoo"), "smoo");
//! ```
//!
//! ## Degradation
//!
//! Colors a device cannot show are mapped to the nearest available entry
//! under the session's distance algorithm:
//!
//! ```rust
//! use standout_palette::{ColorDepth, Session};
//!
//! let mut session = Session::new().with_color_depth(ColorDepth::Ansi16);
//! session.set_algorithm("rgb").unwrap();
//!
//! // aqua (#00ffff) is exactly bright cyan, slot 14.
//! assert_eq!(session.formatter("aqua").start(), "\x1b[38;5;14m");
//!
//! session.set_color_depth(1 << 24).unwrap();
//! assert_eq!(session.formatter("aqua").start(), "\x1b[38;2;0;255;255m");
//! ```

pub mod capability;
mod color;
mod colorspace;
mod config;
mod depth;
pub mod distance;
mod env;
mod error;
mod formatter;
pub mod names;
pub mod palette;
mod resolve;
mod session;

// Error type
pub use error::PaletteError;

// Values
pub use color::RgbColor;
pub use depth::ColorDepth;

// Resolution
pub use distance::{DistanceAlgorithm, DEFAULT_ALGORITHM};
pub use resolve::{nearest_index, resolve, Resolved};

// Sessions and formatters
pub use capability::{Capabilities, Layer};
pub use formatter::{Formatter, COMPOUNDABLES};
pub use session::Session;

// Configuration
pub use config::{detect_color_depth, SessionConfig};
pub use env::{EnvReader, MockEnv, RealEnv};
