//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layer merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use companion_compat::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".compat");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "version_var: BLOCKS_VERSION").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.version_var(), "BLOCKS_VERSION");
//! ```

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_file, load_config_value, load_merged_config, parse_config,
    resolve_project_root, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{CompatConfig, OutputMode, DEFAULT_COMPANION};
pub use validator::{validate, validate_var_name};
