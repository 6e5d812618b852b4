//! Configuration schema.
//!
//! ```yaml
//! companion: Gutenberg
//! version_var: GUTENBERG_VERSION
//! output: normal
//! ```

use serde::{Deserialize, Serialize};

use crate::compat::VERSION_VAR;

/// Display name used when the config does not name the companion.
pub const DEFAULT_COMPANION: &str = "Gutenberg";

/// Root configuration.
///
/// Every field is optional; accessors fall back to the built-in defaults.
/// The reference versions are compiled in and cannot be set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompatConfig {
    /// Display name of the companion feature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companion: Option<String>,

    /// Environment variable the installed version is read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_var: Option<String>,

    /// Default output mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMode>,
}

impl CompatConfig {
    /// The companion display name.
    pub fn companion(&self) -> &str {
        self.companion.as_deref().unwrap_or(DEFAULT_COMPANION)
    }

    /// The environment variable holding the installed version.
    pub fn version_var(&self) -> &str {
        self.version_var.as_deref().unwrap_or(VERSION_VAR)
    }
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}
