//! Configuration schema for `.venvboot.yml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `.venvboot.yml`.
///
/// Every field is optional; an empty file is the same as no file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VenvbootConfig {
    /// Environment directory, relative to the project root
    pub venv_dir: PathBuf,

    /// Requirements manifest, relative to the project root
    pub requirements: PathBuf,

    /// Program launched once the environment is ready
    pub entry_point: PathBuf,

    /// Interpreter names tried in order; platform defaults when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interpreters: Vec<String>,

    /// Run `pip install --upgrade pip` after creating the environment
    #[serde(default = "default_true")]
    pub upgrade_installer: bool,
}

impl Default for VenvbootConfig {
    fn default() -> Self {
        Self {
            venv_dir: PathBuf::from("venv"),
            requirements: PathBuf::from("requirements.txt"),
            entry_point: PathBuf::from("main.py"),
            interpreters: Vec::new(),
            upgrade_installer: true,
        }
    }
}

fn default_true() -> bool {
    true
}
