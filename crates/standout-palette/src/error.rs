//! Error types for palette state and configuration.
//!
//! Only the state setters and input parsing can fail. Formatter lookups are
//! total: a missing capability yields [`Formatter::Null`](crate::Formatter::Null),
//! never an error.

use std::io;

/// Errors raised by color parsing, session setters and config loading.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// Color depth outside the supported set.
    #[error("Invalid color depth {0}: expected one of 0, 4, 8, 16, 256, 16777216")]
    InvalidDepth(u32),

    /// Name not present in the distance algorithm registry.
    #[error("Unknown color distance algorithm '{0}'")]
    InvalidAlgorithmName(String),

    /// Malformed hex color string.
    #[error("Invalid hex color '{0}' (must be 3 or 6 hex digits)")]
    InvalidHex(String),

    /// Config content could not be parsed.
    #[error("Failed to parse config: {0}")]
    Config(String),

    /// Config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),
}

impl PaletteError {
    /// Create a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_yaml::Error> for PaletteError {
    fn from(err: serde_yaml::Error) -> Self {
        PaletteError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_depth_display() {
        let err = PaletteError::InvalidDepth(40);
        let msg = err.to_string();
        assert!(msg.contains("40"));
        assert!(msg.contains("16777216"));
    }

    #[test]
    fn test_invalid_algorithm_display() {
        let err = PaletteError::InvalidAlgorithmName("EenieMeenieMineyMo".to_string());
        assert!(err.to_string().contains("EenieMeenieMineyMo"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: PaletteError = io_err.into();
        assert!(matches!(err, PaletteError::Io(_)));
    }
}
