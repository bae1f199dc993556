//! Error types for venvboot operations.
//!
//! This module defines [`VenvbootError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Variants that stop a run (no interpreter, failed environment creation,
//!   failed first install) are returned as `Err` and end the process with
//!   exit code 1
//! - Synchronization problems never surface as `Err`; the runner turns them
//!   into warnings and carries on to launch
//! - Use `anyhow::Error` (via `VenvbootError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for venvboot operations.
#[derive(Debug, Error)]
pub enum VenvbootError {
    /// No Python interpreter could be found on PATH.
    #[error("Python interpreter not found (tried: {})", candidates.join(", "))]
    InterpreterNotFound { candidates: Vec<String> },

    /// Creating the virtual environment failed.
    #[error("Failed to create virtual environment at {path}: {message}")]
    EnvironmentCreationFailed { path: PathBuf, message: String },

    /// Installing packages from the manifest failed.
    #[error("Failed to install packages from {manifest}: {message}")]
    InstallFailed { manifest: PathBuf, message: String },

    /// The requirements manifest could not be read.
    #[error("Failed to read requirements file {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The program to launch does not exist.
    #[error("Entry point not found: {path}")]
    EntryPointNotFound { path: PathBuf },

    /// An external command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for venvboot operations.
pub type Result<T> = std::result::Result<T, VenvbootError>;
