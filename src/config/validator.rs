//! Configuration validation rules.
//!
//! - `version_var` must be usable as an environment variable name
//! - `companion` must not be blank

use crate::config::schema::CompatConfig;
use crate::error::{CompatError, Result};

/// Validate a configuration, reporting the first problem found.
pub fn validate(config: &CompatConfig) -> Result<()> {
    if let Some(var) = &config.version_var {
        validate_var_name(var)?;
    }

    if let Some(companion) = &config.companion {
        if companion.trim().is_empty() {
            return Err(CompatError::ConfigValidationError {
                message: "companion must not be blank".to_string(),
            });
        }
    }

    Ok(())
}

/// Check that `name` can be looked up as an environment variable.
pub fn validate_var_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(CompatError::ConfigValidationError {
            message: "version_var must not be empty".to_string(),
        });
    }

    if let Some(bad) = name
        .chars()
        .find(|c| *c == '=' || *c == '\0' || c.is_whitespace())
    {
        return Err(CompatError::ConfigValidationError {
            message: format!("version_var '{}' contains invalid character {:?}", name, bad),
        });
    }

    Ok(())
}
