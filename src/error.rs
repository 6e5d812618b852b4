//! Error types for companion-compat.
//!
//! The compatibility checker itself never fails: every input yields an
//! answer. [`CompatError`] covers the surrounding layers (configuration
//! loading and the CLI), and [`Result`] aliases it for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CompatError` for errors that need distinct handling (exit codes)
//! - Use `anyhow::Error` (via `CompatError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for companion-compat operations.
#[derive(Debug, Error)]
pub enum CompatError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CompatError {
    /// Whether this error comes from configuration loading.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
        )
    }
}

/// Result type alias for companion-compat operations.
pub type Result<T> = std::result::Result<T, CompatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = CompatError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = CompatError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = CompatError::ConfigValidationError {
            message: "version_var must not be empty".into(),
        };
        assert!(err.to_string().contains("version_var must not be empty"));
    }

    #[test]
    fn config_errors_are_classified() {
        assert!(CompatError::ConfigValidationError {
            message: "x".into()
        }
        .is_config_error());
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        assert!(!CompatError::from(io_err).is_config_error());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CompatError = io_err.into();
        assert!(matches!(err, CompatError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: CompatError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
