//! Verdict summarizing a compatibility check.
//!
//! Callers rendering notices or gating features usually want a single
//! answer rather than four predicates. [`Verdict`] orders the predicates so
//! that "not installed" is reported before anything else.

use std::fmt;

use serde::Serialize;

use super::checker::CompatibilityChecker;

/// Outcome of checking an installed companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// No installed version was detected.
    NotInstalled,
    /// Installed, but older than the minimum supported major/minor.
    BelowMinimum,
    /// Installed on the latest known major/minor line.
    FullyCompatible,
    /// Installed and newer than the latest known release.
    NewerThanLatest,
    /// Installed and supported, but behind the latest release.
    OlderThanLatest,
}

impl Verdict {
    /// Classify a checker.
    pub fn of(checker: &CompatibilityChecker) -> Self {
        if !checker.is_installed() {
            Self::NotInstalled
        } else if checker.is_below_minimum() {
            Self::BelowMinimum
        } else if checker.is_fully_compatible() {
            Self::FullyCompatible
        } else if checker.is_newer_than_latest() {
            Self::NewerThanLatest
        } else {
            Self::OlderThanLatest
        }
    }

    /// Whether the installed version is within the supported range.
    pub fn is_supported(&self) -> bool {
        matches!(
            self,
            Self::FullyCompatible | Self::NewerThanLatest | Self::OlderThanLatest
        )
    }

    /// Stable kebab-case name, as used in JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotInstalled => "not-installed",
            Self::BelowMinimum => "below-minimum",
            Self::FullyCompatible => "fully-compatible",
            Self::NewerThanLatest => "newer-than-latest",
            Self::OlderThanLatest => "older-than-latest",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotInstalled => "not installed",
            Self::BelowMinimum => "below the minimum supported version",
            Self::FullyCompatible => "fully compatible",
            Self::NewerThanLatest => "newer than the latest known release",
            Self::OlderThanLatest => "supported, but older than the latest release",
        };
        f.write_str(text)
    }
}

/// Serializable snapshot of a compatibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityReport {
    /// Display name of the companion.
    pub companion: String,
    /// Environment variable the version was read from.
    pub version_var: String,
    /// Installed version, `None` when not installed.
    pub installed_version: Option<String>,
    /// Latest known release.
    pub latest_release: String,
    /// Minimum supported version.
    pub minimum_supported: String,
    pub is_installed: bool,
    pub is_below_minimum: bool,
    pub is_latest_version: bool,
    pub is_fully_compatible: bool,
    pub verdict: Verdict,
}

impl CompatibilityReport {
    /// Capture the state of a checker.
    pub fn new(checker: &CompatibilityChecker, companion: &str, version_var: &str) -> Self {
        let references = checker.references();
        Self {
            companion: companion.to_string(),
            version_var: version_var.to_string(),
            installed_version: checker
                .is_installed()
                .then(|| checker.installed_version().to_string()),
            latest_release: references.latest_release().to_string(),
            minimum_supported: references.minimum_supported().to_string(),
            is_installed: checker.is_installed(),
            is_below_minimum: checker.is_below_minimum(),
            is_latest_version: checker.is_latest_version(),
            is_fully_compatible: checker.is_fully_compatible(),
            verdict: checker.verdict(),
        }
    }
}
