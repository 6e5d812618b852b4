//! companion-compat - Compatibility checking for an optional companion feature.
//!
//! A host that integrates with an optional companion (by default the
//! Gutenberg editor, detected through `GUTENBERG_VERSION`) ships with two
//! reference versions: the latest known release and the minimum it still
//! supports. This crate reads the installed version once and classifies it
//! against those references at major.minor granularity.
//!
//! # Modules
//!
//! - [`compat`] - Version detection, projection and the compatibility checker
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use companion_compat::compat::{CompatibilityChecker, ReferenceVersions};
//!
//! let checker = CompatibilityChecker::detect_with_env(
//!     "GUTENBERG_VERSION",
//!     ReferenceVersions::default(),
//!     |_| Ok("3.5.0".to_string()),
//! );
//! assert!(checker.is_installed());
//! assert!(!checker.is_below_minimum());
//! // Newer than the latest known release is not vouched for
//! assert!(!checker.is_fully_compatible());
//! ```

pub mod cli;
pub mod compat;
pub mod config;
pub mod error;
pub mod ui;

pub use compat::{CompatibilityChecker, ReferenceVersions, Verdict};
pub use error::{CompatError, Result};
