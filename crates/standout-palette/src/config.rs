//! Session configuration and environment detection.
//!
//! A [`SessionConfig`] is usually loaded from YAML:
//!
//! ```rust
//! use standout_palette::SessionConfig;
//!
//! let config = SessionConfig::from_yaml(r#"
//! color_depth: 256
//! algorithm: cie76
//! capabilities:
//!   bold: "\e[1m"
//! "#).unwrap();
//!
//! let session = config.build().unwrap();
//! assert_eq!(session.number_of_colors(), 256);
//! assert_eq!(session.algorithm(), "cie76");
//! ```
//!
//! Every field is optional; missing fields keep the session defaults
//! (xterm capabilities, 256 colors, `cie2000`, styling on).

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distance;
use crate::env::EnvReader;
use crate::{ColorDepth, PaletteError, Session};

/// User-facing session settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Raw color count: 0, 4, 8, 16, 256 or 16777216.
    pub color_depth: Option<u32>,
    /// Registered distance algorithm name.
    pub algorithm: Option<String>,
    /// Forces styling on or off regardless of detection.
    pub force_styling: Option<bool>,
    /// Capability overrides layered on top of the xterm table.
    pub capabilities: HashMap<String, String>,
}

impl SessionConfig {
    /// Parses a config from YAML.
    pub fn from_yaml(content: &str) -> Result<Self, PaletteError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Reads and parses a YAML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("loaded session config from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Builds a fresh session from this config.
    pub fn build(&self) -> Result<Session, PaletteError> {
        let mut session = Session::new();
        self.apply(&mut session)?;
        Ok(session)
    }

    /// Applies this config to an existing session.
    ///
    /// All values are validated before anything changes, so a failing
    /// config leaves the session as it was.
    pub fn apply(&self, session: &mut Session) -> Result<(), PaletteError> {
        let depth = self.color_depth.map(ColorDepth::from_count).transpose()?;
        let algorithm = match &self.algorithm {
            Some(name) => Some(
                distance::lookup(name)
                    .ok_or_else(|| PaletteError::InvalidAlgorithmName(name.clone()))?,
            ),
            None => None,
        };

        if !self.capabilities.is_empty() {
            let caps = self
                .capabilities
                .iter()
                .fold(session.capabilities().clone(), |caps, (name, seq)| {
                    caps.with(name.as_str(), seq.as_str())
                });
            session.set_capabilities(caps);
        }
        if let Some(depth) = depth {
            session.set_color_depth(depth.count())?;
        }
        if let Some(algorithm) = algorithm {
            session.set_algorithm(algorithm.name())?;
        }
        if let Some(styling) = self.force_styling {
            session.set_does_styling(styling);
        }
        Ok(())
    }
}

/// Infers the color depth from `NO_COLOR`, `COLORTERM` and `TERM`.
///
/// | Condition                                  | Depth      |
/// |--------------------------------------------|------------|
/// | `NO_COLOR` set and non-empty               | 0          |
/// | `COLORTERM` is `truecolor` or `24bit`      | 16777216   |
/// | `TERM` unset or `dumb`                     | 0          |
/// | `TERM` contains `256color`                 | 256        |
/// | `TERM` contains `16color`                  | 16         |
/// | anything else                              | 8          |
pub fn detect_color_depth(env: &dyn EnvReader) -> ColorDepth {
    if env.var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return ColorDepth::Monochrome;
    }
    if matches!(env.var("COLORTERM").as_deref(), Some("truecolor" | "24bit")) {
        return ColorDepth::TrueColor;
    }
    match env.var("TERM") {
        None => ColorDepth::Monochrome,
        Some(term) if term == "dumb" => ColorDepth::Monochrome,
        Some(term) if term.contains("256color") => ColorDepth::Ansi256,
        Some(term) if term.contains("16color") => ColorDepth::Ansi16,
        Some(term) => {
            log::warn!("unrecognized TERM '{}', assuming 8 colors", term);
            ColorDepth::Ansi8
        }
    }
}
