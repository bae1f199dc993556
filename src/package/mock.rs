//! Mock package manager for testing.
//!
//! `MockPackageManager` implements [`PackageManager`] in memory and records
//! every call, so the provisioning and synchronization logic can be
//! exercised without a Python installation.
//!
//! # Example
//!
//! ```
//! use venvboot::package::{MockPackageManager, PackageManager, PackageName};
//!
//! let packages = MockPackageManager::new()
//!     .with_installed("requests", "2.31.0")
//!     .with_requires("requests", &["urllib3"]);
//!
//! let records = packages.package_metadata(&[PackageName::new("requests")]);
//! assert_eq!(records[0].requires, vec!["urllib3"]);
//! assert_eq!(packages.calls(), vec!["show requests"]);
//! ```

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use crate::environment::VenvLayout;
use crate::error::{Result, VenvbootError};

use super::metadata::{InstalledPackage, PackageMetadata};
use super::name::PackageName;
use super::pip::PackageManager;

/// In-memory [`PackageManager`] that records its calls.
#[derive(Debug, Default)]
pub struct MockPackageManager {
    installed: Vec<InstalledPackage>,
    metadata: Vec<PackageMetadata>,
    fail_create: bool,
    skip_marker: bool,
    fail_upgrade: bool,
    fail_install: bool,
    fail_list: bool,
    calls: RefCell<Vec<String>>,
}

impl MockPackageManager {
    /// Create an empty mock: nothing installed, every operation succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a package as installed.
    pub fn with_installed(mut self, name: &str, version: &str) -> Self {
        self.installed.push(InstalledPackage::new(name, version));
        self
    }

    /// Report metadata for a package with the given direct dependencies.
    pub fn with_requires(mut self, name: &str, requires: &[&str]) -> Self {
        self.metadata.push(PackageMetadata {
            name: name.to_string(),
            version: None,
            requires: requires.iter().map(|r| r.to_string()).collect(),
        });
        self
    }

    /// Make environment creation fail.
    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Make environment creation "succeed" without producing an interpreter.
    pub fn without_marker(mut self) -> Self {
        self.skip_marker = true;
        self
    }

    /// Make the installer upgrade fail.
    pub fn failing_upgrade(mut self) -> Self {
        self.fail_upgrade = true;
        self
    }

    /// Make manifest installs fail.
    pub fn failing_install(mut self) -> Self {
        self.fail_install = true;
        self
    }

    /// Make the installed-package listing fail.
    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Number of calls whose description starts with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl PackageManager for MockPackageManager {
    fn create_environment(&self, _interpreter: &Path, venv_dir: &Path) -> Result<()> {
        self.record("create".to_string());
        if self.fail_create {
            return Err(VenvbootError::EnvironmentCreationFailed {
                path: venv_dir.to_path_buf(),
                message: "exit code 1".to_string(),
            });
        }
        if !self.skip_marker {
            let python = VenvLayout::new(venv_dir).python();
            if let Some(parent) = python.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&python, "")?;
        }
        Ok(())
    }

    fn upgrade_installer(&self) -> Result<()> {
        self.record("upgrade".to_string());
        if self.fail_upgrade {
            return Err(VenvbootError::CommandFailed {
                command: "python -m pip install --upgrade pip".to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }

    fn install_manifest(&self, manifest: &Path) -> Result<()> {
        self.record(format!("install {}", manifest.display()));
        if self.fail_install {
            return Err(VenvbootError::InstallFailed {
                manifest: manifest.to_path_buf(),
                message: "exit code 1".to_string(),
            });
        }
        Ok(())
    }

    fn installed_packages(&self) -> Result<Vec<InstalledPackage>> {
        self.record("list".to_string());
        if self.fail_list {
            return Err(VenvbootError::CommandFailed {
                command: "python -m pip list".to_string(),
                code: Some(1),
            });
        }
        Ok(self.installed.clone())
    }

    fn package_metadata(&self, names: &[PackageName]) -> Vec<PackageMetadata> {
        let joined: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
        self.record(format!("show {}", joined.join(" ")));
        self.metadata
            .iter()
            .filter(|record| names.contains(&PackageName::new(&record.name)))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let packages = MockPackageManager::new();
        packages.upgrade_installer().unwrap();
        packages.install_manifest(Path::new("req.txt")).unwrap();
        packages.installed_packages().unwrap();

        assert_eq!(packages.calls(), vec!["upgrade", "install req.txt", "list"]);
        assert_eq!(packages.count("install"), 1);
    }

    #[test]
    fn create_writes_marker() {
        let temp = tempfile::TempDir::new().unwrap();
        let venv = temp.path().join("venv");
        MockPackageManager::new()
            .create_environment(Path::new("python3"), &venv)
            .unwrap();

        assert!(VenvLayout::new(&venv).is_provisioned());
    }

    #[test]
    fn failures_are_configurable() {
        let packages = MockPackageManager::new()
            .failing_install()
            .failing_list()
            .failing_upgrade();

        assert!(packages.install_manifest(Path::new("r.txt")).is_err());
        assert!(packages.installed_packages().is_err());
        assert!(packages.upgrade_installer().is_err());
    }

    #[test]
    fn metadata_filters_by_requested_names() {
        let packages = MockPackageManager::new()
            .with_requires("requests", &["urllib3"])
            .with_requires("click", &[]);

        let records = packages.package_metadata(&[PackageName::new("Requests")]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "requests");
    }
}
