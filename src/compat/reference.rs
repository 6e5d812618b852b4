//! Reference versions the host is built against.

use serde::Serialize;

use super::version::MajorMinor;

/// The currently released version of the companion.
pub const CURRENT_RELEASE: &str = "3.4.0";

/// The minimum companion version the host still supports.
pub const MINIMUM_SUPPORTED: &str = "2.8.0";

/// The pair of versions an installed companion is compared against.
///
/// Defaults to [`CURRENT_RELEASE`] and [`MINIMUM_SUPPORTED`]. Other values
/// can be injected for embedding or tests; the checker never changes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceVersions {
    latest_release: String,
    minimum_supported: String,
}

impl Default for ReferenceVersions {
    fn default() -> Self {
        Self::new(CURRENT_RELEASE, MINIMUM_SUPPORTED)
    }
}

impl ReferenceVersions {
    /// Create reference versions from a latest release and a minimum.
    pub fn new(latest_release: impl Into<String>, minimum_supported: impl Into<String>) -> Self {
        Self {
            latest_release: latest_release.into(),
            minimum_supported: minimum_supported.into(),
        }
    }

    /// The latest known release.
    pub fn latest_release(&self) -> &str {
        &self.latest_release
    }

    /// The minimum supported version.
    pub fn minimum_supported(&self) -> &str {
        &self.minimum_supported
    }

    pub(crate) fn latest_major_minor(&self) -> MajorMinor {
        MajorMinor::of(&self.latest_release)
    }

    pub(crate) fn minimum_major_minor(&self) -> MajorMinor {
        MajorMinor::of(&self.minimum_supported)
    }
}
