//! Interpreter discovery.
//!
//! Candidates are tried in priority order against the directories on
//! `PATH`. The lookup walks `PATH` itself instead of shelling out to
//! `which`/`where`, whose behavior differs between systems.
//!
//! # Example
//!
//! ```no_run
//! use venvboot::environment::InterpreterLocator;
//!
//! let python = InterpreterLocator::new().locate()?;
//! println!("Using {}", python.display());
//! # Ok::<(), venvboot::error::VenvbootError>(())
//! ```

use std::path::{Path, PathBuf};

use crate::error::{Result, VenvbootError};
use crate::shell::executable_extensions;

/// Interpreter names tried when none are configured.
pub fn default_candidates() -> Vec<String> {
    let names: &[&str] = if cfg!(windows) {
        &["py", "python", "python3"]
    } else {
        &["python3", "python"]
    };
    names.iter().map(|n| n.to_string()).collect()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Each directory is tried with the bare name first and then with every
/// extension in `extensions`. Returns the first match that is a regular
/// executable file.
pub fn resolve_tool_path(
    tool: &str,
    path_entries: &[PathBuf],
    extensions: &[String],
) -> Option<PathBuf> {
    for dir in path_entries {
        let bare = dir.join(tool);
        if is_runnable(&bare) {
            return Some(bare);
        }
        for ext in extensions {
            let candidate = dir.join(format!("{}{}", tool, ext));
            if is_runnable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

fn is_runnable(path: &Path) -> bool {
    path.is_file() && is_executable(path)
}

fn has_separator(candidate: &str) -> bool {
    candidate.contains('/') || candidate.contains(std::path::MAIN_SEPARATOR)
}

/// Finds a Python interpreter on the host.
#[derive(Debug, Clone)]
pub struct InterpreterLocator {
    candidates: Vec<String>,
    path_entries: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl InterpreterLocator {
    /// Locator using the platform candidates and the process `PATH`.
    pub fn new() -> Self {
        Self::with_candidates(default_candidates())
    }

    /// Locator for an explicit candidate list. An empty list falls back to
    /// the platform defaults.
    pub fn with_candidates(candidates: Vec<String>) -> Self {
        let candidates = if candidates.is_empty() {
            default_candidates()
        } else {
            candidates
        };
        Self {
            candidates,
            path_entries: parse_system_path(),
            extensions: executable_extensions(),
        }
    }

    /// Replace the directories searched.
    pub fn with_path(mut self, path_entries: Vec<PathBuf>) -> Self {
        self.path_entries = path_entries;
        self
    }

    /// The candidates, in the order they are tried.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Return the first candidate that resolves to an executable.
    pub fn locate(&self) -> Result<PathBuf> {
        for candidate in &self.candidates {
            let found = if has_separator(candidate) {
                // Spawned from the project root, so pin it to our cwd now
                let path = std::path::absolute(candidate)?;
                is_runnable(&path).then_some(path)
            } else {
                resolve_tool_path(candidate, &self.path_entries, &self.extensions)
            };

            match found {
                Some(path) => {
                    tracing::debug!("Interpreter candidate {} -> {}", candidate, path.display());
                    return Ok(path);
                }
                None => tracing::debug!("Interpreter candidate {} not found", candidate),
            }
        }

        Err(VenvbootError::InterpreterNotFound {
            candidates: self.candidates.clone(),
        })
    }
}

impl Default for InterpreterLocator {
    fn default() -> Self {
        Self::new()
    }
}
