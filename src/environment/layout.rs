//! Paths inside a virtual environment directory.

use std::path::{Path, PathBuf};

#[cfg(windows)]
const BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
const BIN_DIR: &str = "bin";

#[cfg(windows)]
const PYTHON_EXE: &str = "python.exe";
#[cfg(not(windows))]
const PYTHON_EXE: &str = "python";

/// Platform layout of a virtual environment rooted at a directory.
///
/// The environment's own interpreter doubles as the marker: if it exists
/// the environment is considered provisioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenvLayout {
    root: PathBuf,
}

impl VenvLayout {
    /// Layout for an environment at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The environment directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the environment's executables.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(BIN_DIR)
    }

    /// The environment-local interpreter.
    pub fn python(&self) -> PathBuf {
        self.bin_dir().join(PYTHON_EXE)
    }

    /// Whether the marker interpreter exists.
    pub fn is_provisioned(&self) -> bool {
        self.python().is_file()
    }
}
