//! Companion version detection and compatibility checking.
//!
//! This module answers two questions about an optional companion feature:
//! is it installed, and is the installed version one the host supports?
//!
//! # Modules
//!
//! - [`checker`] - [`CompatibilityChecker`], detection and the compatibility predicates
//! - [`reference`] - Compiled reference versions (latest release, minimum supported)
//! - [`verdict`] - [`Verdict`] summary and serializable [`CompatibilityReport`]
//! - [`version`] - Major/minor projection and ordering
//!
//! # Example
//!
//! ```
//! use companion_compat::compat::{CompatibilityChecker, ReferenceVersions, Verdict};
//!
//! let checker = CompatibilityChecker::with_installed("3.4.2", ReferenceVersions::default());
//! assert!(checker.is_installed());
//! assert!(checker.is_fully_compatible());
//! assert_eq!(Verdict::of(&checker), Verdict::FullyCompatible);
//! ```

pub mod checker;
pub mod reference;
pub mod verdict;
pub mod version;

pub use checker::{CompatibilityChecker, VERSION_VAR};
pub use reference::{ReferenceVersions, CURRENT_RELEASE, MINIMUM_SUPPORTED};
pub use verdict::{CompatibilityReport, Verdict};
pub use version::{major_minor, MajorMinor};
