//! Configuration file discovery and loading.
//!
//! Files are merged in this order (later overrides earlier):
//! 1. Project config (`.compat/config.yml`)
//! 2. Local overrides (`.compat/config.local.yml`)
//!
//! Neither file is required. With no files the defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::merger::merge_configs;
use crate::config::schema::CompatConfig;
use crate::config::validator::validate;
use crate::error::{CompatError, Result};

/// Directory holding configuration, relative to the project root.
pub const CONFIG_DIR: &str = ".compat";

/// Paths to configuration files in merge order.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .compat/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .compat/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let dir = project_root.join(CONFIG_DIR);
        Self {
            project: existing(dir.join("config.yml")),
            project_local: existing(dir.join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Pick the project root: an explicit path, else the current directory.
///
/// If the current directory cannot be read (e.g. it was removed), the empty
/// path is used, which makes config discovery relative to nothing.
pub fn resolve_project_root(
    explicit: Option<PathBuf>,
    current_dir: std::io::Result<PathBuf>,
) -> PathBuf {
    explicit.unwrap_or_else(|| {
        current_dir.unwrap_or_else(|e| {
            debug!("Cannot read current directory ({}), using empty project root", e);
            PathBuf::new()
        })
    })
}

/// Load a single config file and parse it.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CompatConfig> {
    let value = load_config_value(path)?;
    from_value(merge_configs(&[value]), path)
}

/// Parse YAML content into a config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CompatConfig> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| CompatError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    from_value(merge_configs(&[value]), source_path)
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CompatError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CompatError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| CompatError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the config files discovered under a project root.
pub fn load_merged_config(project_root: &Path) -> Result<CompatConfig> {
    let paths = ConfigPaths::discover(project_root);

    let mut values = Vec::new();
    for path in paths.all_existing() {
        debug!("Loading config from {}", path.display());
        values.push(load_config_value(path)?);
    }

    from_value(
        merge_configs(&values),
        &project_root.join(CONFIG_DIR).join("config.yml"),
    )
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file, which must exist.
/// Otherwise, discovers and merges the project's config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<CompatConfig> {
    let config = match config_override {
        Some(path) => load_config_file(path)?,
        None => load_merged_config(project_root)?,
    };
    validate(&config)?;
    Ok(config)
}

fn from_value(value: serde_yaml::Value, source_path: &Path) -> Result<CompatConfig> {
    serde_yaml::from_value(value).map_err(|e| CompatError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
