//! Requirements parsing and synchronization.
//!
//! # Modules
//!
//! - [`manifest`] - Lazy parser for `requirements.txt` style manifests
//! - [`expander`] - One-level dependency expansion via package metadata
//! - [`checker`] - Installed-set differ
//! - [`status`] - Gap reports and synchronization outcomes
//! - [`installer`] - Reinstall orchestration for an existing environment

pub mod checker;
pub mod expander;
pub mod installer;
pub mod manifest;
pub mod status;

pub use checker::GapChecker;
pub use expander::expand;
pub use installer::synchronize;
pub use manifest::{parse_line, Manifest};
pub use status::{GapReport, SyncOutcome};
