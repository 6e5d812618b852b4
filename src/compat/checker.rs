//! Installed-version detection and compatibility predicates.
//!
//! The checker reads the installed companion version once, when it is
//! created, and answers every later question from that snapshot.
//!
//! # Example
//!
//! ```
//! use companion_compat::compat::{CompatibilityChecker, ReferenceVersions};
//!
//! let checker = CompatibilityChecker::detect_with_env(
//!     "GUTENBERG_VERSION",
//!     ReferenceVersions::default(),
//!     |_| Err(std::env::VarError::NotPresent),
//! );
//! assert!(!checker.is_installed());
//! assert_eq!(checker.installed_version(), "");
//! ```

use std::env::VarError;

use tracing::debug;

use super::reference::ReferenceVersions;
use super::verdict::{CompatibilityReport, Verdict};
use super::version::MajorMinor;

/// Environment variable holding the installed companion version.
pub const VERSION_VAR: &str = "GUTENBERG_VERSION";

/// Compatibility of the installed companion against the host's reference versions.
#[derive(Debug, Clone)]
pub struct CompatibilityChecker {
    /// Installed version as detected, empty when not installed.
    installed: String,
    references: ReferenceVersions,
}

impl CompatibilityChecker {
    /// Detect the installed version from [`VERSION_VAR`] in the process
    /// environment and check it against the compiled reference versions.
    pub fn detect() -> Self {
        Self::detect_var(VERSION_VAR)
    }

    /// Detect the installed version from a named variable in the process
    /// environment.
    pub fn detect_var(var: &str) -> Self {
        Self::detect_with_env(var, ReferenceVersions::default(), |key: &str| {
            std::env::var(key)
        })
    }

    /// Detect the installed version with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    /// A missing variable, or one that is not valid unicode, means the
    /// companion is not installed.
    pub fn detect_with_env<F>(var: &str, references: ReferenceVersions, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let installed = match env_fn(var) {
            Ok(version) => {
                debug!("{} = {:?}", var, version);
                version
            }
            Err(e) => {
                debug!("{} not readable ({}), companion not installed", var, e);
                String::new()
            }
        };

        Self::with_installed(installed, references)
    }

    /// Create a checker for an already known installed version.
    pub fn with_installed(installed: impl Into<String>, references: ReferenceVersions) -> Self {
        Self {
            installed: installed.into(),
            references,
        }
    }

    /// Whether the companion is installed.
    pub fn is_installed(&self) -> bool {
        !self.installed.is_empty()
    }

    /// The installed version as detected. Empty if not installed.
    pub fn installed_version(&self) -> &str {
        &self.installed
    }

    /// The reference versions this checker compares against.
    pub fn references(&self) -> &ReferenceVersions {
        &self.references
    }

    /// Whether the installed major/minor is below the minimum supported one.
    ///
    /// Not being installed is not special-cased: the empty projection orders
    /// below any reference, so this returns `true` when nothing is installed.
    /// Use [`Verdict`] to report absence before anything else.
    pub fn is_below_minimum(&self) -> bool {
        self.installed_major_minor() < self.references.minimum_major_minor()
    }

    /// Whether the installed major/minor equals the latest release's.
    pub fn is_latest_version(&self) -> bool {
        self.installed_major_minor() == self.references.latest_major_minor()
    }

    /// Whether the installed version is supported and on the latest
    /// major/minor line.
    ///
    /// Versions newer than the latest known release are not fully compatible.
    pub fn is_fully_compatible(&self) -> bool {
        !self.is_below_minimum() && self.is_latest_version()
    }

    /// Whether the installed major/minor is above the latest known release.
    pub fn is_newer_than_latest(&self) -> bool {
        self.installed_major_minor() > self.references.latest_major_minor()
    }

    /// Classify this checker into a single [`Verdict`].
    pub fn verdict(&self) -> Verdict {
        Verdict::of(self)
    }

    /// Build a serializable snapshot of this check.
    pub fn report(&self, companion: &str, version_var: &str) -> CompatibilityReport {
        CompatibilityReport::new(self, companion, version_var)
    }

    fn installed_major_minor(&self) -> MajorMinor {
        MajorMinor::of(&self.installed)
    }
}
