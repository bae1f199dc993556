//! Project paths resolved from the configuration.

use std::path::{Path, PathBuf};

use crate::config::schema::VenvbootConfig;
use crate::environment::VenvLayout;
use crate::error::Result;

/// Absolute project root for `explicit`, or the current directory.
///
/// Child processes run inside the root, so a relative root would be
/// resolved twice.
pub fn project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let root = match explicit {
        Some(path) => std::path::absolute(path)?,
        None => std::env::current_dir()?,
    };
    Ok(root)
}

/// Absolute locations of everything a run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Project root; the launched program runs here.
    pub root: PathBuf,
    /// The virtual environment.
    pub venv: VenvLayout,
    /// Requirements manifest.
    pub manifest: PathBuf,
    /// Program to launch.
    pub entry_point: PathBuf,
}

impl ProjectPaths {
    /// Resolve `config` against `root`. Absolute config paths are kept.
    pub fn resolve(root: &Path, config: &VenvbootConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            venv: VenvLayout::new(root.join(&config.venv_dir)),
            manifest: root.join(&config.requirements),
            entry_point: root.join(&config.entry_point),
        }
    }
}
