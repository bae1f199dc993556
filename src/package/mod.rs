//! The package-management collaborator.
//!
//! venvboot treats the package manager as an opaque tool with four
//! capabilities: environment creation, install from a manifest, listing
//! installed packages, and per-package metadata lookup. This module defines
//! that seam ([`PackageManager`]), the pip-backed implementation ([`Pip`]),
//! and the parsers for pip's reports.
//!
//! # Modules
//!
//! - [`metadata`] - Installed-list and `pip show` parsing
//! - [`mock`] - In-memory package manager for tests
//! - [`name`] - Case- and separator-insensitive package names
//! - [`pip`] - The [`PackageManager`] trait and [`Pip`]

pub mod metadata;
pub mod mock;
pub mod name;
pub mod pip;

pub use metadata::{InstalledPackage, PackageMetadata};
pub use mock::MockPackageManager;
pub use name::PackageName;
pub use pip::{PackageManager, Pip};
