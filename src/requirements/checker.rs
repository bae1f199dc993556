//! Installed-set differ.
//!
//! The `GapChecker` answers "is this package installed?" against a snapshot
//! of the environment taken once per run.

use std::collections::HashSet;

use crate::package::{InstalledPackage, PackageName};

use super::status::GapReport;

/// Checks required package names against the installed set.
///
/// Membership is case-insensitive and treats `-`, `_` and `.` as the same
/// separator.
#[derive(Debug, Clone)]
pub struct GapChecker {
    installed: HashSet<PackageName>,
}

impl GapChecker {
    /// Create a checker from the installed-package snapshot.
    pub fn new(installed: &[InstalledPackage]) -> Self {
        Self {
            installed: installed.iter().map(InstalledPackage::package_name).collect(),
        }
    }

    /// Number of distinct installed packages.
    pub fn installed_count(&self) -> usize {
        self.installed.len()
    }

    /// Whether a single package is installed.
    pub fn is_installed(&self, name: &PackageName) -> bool {
        self.installed.contains(name)
    }

    /// Check every name in `required`, collecting the missing ones.
    ///
    /// Duplicates in `required` are checked once and reported once.
    pub fn check_all<'a, I>(&self, required: I) -> GapReport
    where
        I: IntoIterator<Item = &'a PackageName>,
    {
        let mut seen = HashSet::new();
        let mut report = GapReport::default();

        for name in required {
            if !seen.insert(name.clone()) {
                continue;
            }
            report.checked += 1;
            if !self.is_installed(name) {
                tracing::debug!("{} is not installed", name);
                report.missing.push(name.clone());
            }
        }

        report
    }
}
