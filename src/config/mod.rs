//! Configuration loading for venvboot.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Path resolution against the project root in [`paths`]
//!
//! # Example
//!
//! ```
//! use venvboot::config::{load_config, ProjectPaths};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".venvboot.yml"), "entry_point: app.py").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let paths = ProjectPaths::resolve(temp.path(), &config);
//! assert_eq!(paths.entry_point, temp.path().join("app.py"));
//! ```

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::{find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use paths::{project_root, ProjectPaths};
pub use schema::VenvbootConfig;
