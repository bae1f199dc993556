//! Configuration file discovery and loading.
//!
//! Lookup order: an explicit `--config` file, else `.venvboot.yml` in the
//! project root, else built-in defaults. Files are never merged.

use crate::config::schema::VenvbootConfig;
use crate::error::{Result, VenvbootError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project config file.
pub const CONFIG_FILE_NAME: &str = ".venvboot.yml";

/// Find the project config at `.venvboot.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<VenvbootConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VenvbootError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VenvbootError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// An empty or comment-only document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<VenvbootConfig> {
    let parse_error = |e: serde_yaml::Error| VenvbootError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    };

    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(parse_error)?;
    if value.is_null() {
        return Ok(VenvbootConfig::default());
    }
    serde_yaml::from_value(value).map_err(parse_error)
}

/// Load the configuration for a project.
///
/// `explicit` must exist if given; the project file is optional.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<VenvbootConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_project_config(project_root),
    };

    match path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            Ok(VenvbootConfig::default())
        }
    }
}
