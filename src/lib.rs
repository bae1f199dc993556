//! venvboot - Bootstrap a Python virtual environment and run a program in it.
//!
//! On the first run venvboot finds a Python interpreter, creates the
//! environment and installs the requirements manifest. On later runs it
//! checks the installed packages against the manifest (plus each
//! requirement's direct dependencies) and reinstalls when something is
//! missing. Either way it then runs the entry point with the environment's
//! interpreter and exits with the program's exit code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.venvboot.yml` loading and path resolution
//! - [`environment`] - Interpreter discovery and environment provisioning
//! - [`error`] - Error types and result aliases
//! - [`launcher`] - Running the entry point
//! - [`package`] - The pip collaborator and package name handling
//! - [`requirements`] - Manifest parsing, dependency expansion and sync
//! - [`runner`] - The bootstrap state machine
//! - [`shell`] - External command execution
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use venvboot::package::{MockPackageManager, PackageName};
//! use venvboot::requirements::{expand, GapChecker, Manifest};
//! use std::path::Path;
//!
//! let manifest = Manifest::from_contents(
//!     Path::new("requirements.txt"),
//!     "requests==2.31.0\n# comment\n\nclick>=8.0\n",
//! );
//! let required: Vec<PackageName> = manifest.names().collect();
//!
//! let packages = MockPackageManager::new()
//!     .with_installed("requests", "2.31.0")
//!     .with_installed("urllib3", "2.0")
//!     .with_requires("requests", &["urllib3"]);
//! let expanded = expand(&required, &packages);
//!
//! use venvboot::package::PackageManager;
//! let checker = GapChecker::new(&packages.installed_packages().unwrap());
//! let report = checker.check_all(&expanded);
//! assert_eq!(report.missing_list(), "click");
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod launcher;
pub mod package;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{Result, VenvbootError};
