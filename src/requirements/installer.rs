//! Synchronization of an existing environment with its manifest.
//!
//! Reads the manifest, expands it one level through package metadata,
//! diffs the result against the installed set and, if anything is
//! missing, reinstalls the whole manifest once. Every failure in here is
//! a warning: the caller always proceeds to launch.

use std::path::Path;

use crate::package::{PackageManager, PackageName};
use crate::requirements::checker::GapChecker;
use crate::requirements::expander::expand;
use crate::requirements::manifest::Manifest;
use crate::requirements::status::SyncOutcome;
use crate::ui::UserInterface;

/// Bring the environment in line with the manifest at `manifest_path`.
pub fn synchronize(
    manifest_path: &Path,
    packages: &dyn PackageManager,
    ui: &mut dyn UserInterface,
) -> SyncOutcome {
    let manifest = match Manifest::read(manifest_path) {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::debug!("Skipping package check: {}", e);
            let reason = format!(
                "{} not readable, skipping package check",
                manifest_path.display()
            );
            ui.warning(&reason);
            return SyncOutcome::Skipped { reason };
        }
    };

    let required: Vec<PackageName> = manifest.names().collect();
    tracing::debug!("Manifest lists {} package(s)", required.len());

    let expanded = expand(&required, packages);
    tracing::debug!(
        "Checking {} name(s) after dependency expansion",
        expanded.len()
    );

    let installed = match packages.installed_packages() {
        Ok(installed) => installed,
        Err(e) => {
            tracing::debug!("Could not list installed packages: {}", e);
            let reason = format!("Could not list installed packages: {}", e);
            ui.warning(&reason);
            return SyncOutcome::Skipped { reason };
        }
    };

    let checker = GapChecker::new(&installed);
    tracing::debug!("{} package(s) installed", checker.installed_count());
    let report = checker.check_all(&expanded);

    if !report.any_missing() {
        tracing::info!("All {} package(s) satisfied", report.checked);
        ui.success("All packages satisfied");
        return SyncOutcome::Satisfied {
            checked: report.checked,
        };
    }

    for name in &report.missing {
        ui.message(&format!("Missing package: {}", name));
    }
    tracing::info!("Missing package(s): {}", report.missing_list());

    let mut spinner = ui.start_spinner("Reinstalling requirements...");
    match packages.install_manifest(manifest.path()) {
        Ok(()) => {
            spinner.finish_success("Requirements reinstalled");
            SyncOutcome::Reinstalled {
                missing: report.missing,
            }
        }
        Err(e) => {
            tracing::debug!("Reinstall failed: {}", e);
            spinner.finish_error("Reinstall failed");
            let message = e.to_string();
            ui.warning(&format!("Could not install missing packages: {}", message));
            SyncOutcome::ReinstallFailed {
                missing: report.missing,
                message,
            }
        }
    }
}
