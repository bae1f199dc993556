//! First-time environment provisioning.

use std::path::Path;

use crate::error::{Result, VenvbootError};
use crate::package::PackageManager;
use crate::ui::UserInterface;

use super::layout::VenvLayout;

/// Creates a virtual environment and performs the first full install.
pub struct Provisioner<'a> {
    packages: &'a dyn PackageManager,
    upgrade_installer: bool,
}

impl<'a> Provisioner<'a> {
    /// Create a provisioner that drives `packages`.
    pub fn new(packages: &'a dyn PackageManager) -> Self {
        Self {
            packages,
            upgrade_installer: true,
        }
    }

    /// Whether to upgrade pip right after creating the environment.
    pub fn upgrade_installer(mut self, enabled: bool) -> Self {
        self.upgrade_installer = enabled;
        self
    }

    /// Create the environment at `layout` with `interpreter`, then install
    /// everything in `manifest`.
    ///
    /// Creation and the full install are fatal on failure. A failed pip
    /// upgrade, or a missing manifest, only produces a warning.
    pub fn provision(
        &self,
        interpreter: &Path,
        layout: &VenvLayout,
        manifest: &Path,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        tracing::info!(
            "Creating virtual environment at {} with {}",
            layout.root().display(),
            interpreter.display()
        );

        let mut spinner = ui.start_spinner("Creating virtual environment...");
        if let Err(e) = self.packages.create_environment(interpreter, layout.root()) {
            spinner.finish_error("Failed to create virtual environment");
            return Err(e);
        }
        if !layout.is_provisioned() {
            spinner.finish_error("Failed to create virtual environment");
            return Err(VenvbootError::EnvironmentCreationFailed {
                path: layout.root().to_path_buf(),
                message: format!("{} was not created", layout.python().display()),
            });
        }
        spinner.finish_success(&format!(
            "Created virtual environment in {}",
            layout.root().display()
        ));

        if self.upgrade_installer {
            let mut spinner = ui.start_spinner("Upgrading pip...");
            match self.packages.upgrade_installer() {
                Ok(()) => spinner.finish_success("pip upgraded"),
                Err(e) => {
                    tracing::debug!("pip upgrade failed: {}", e);
                    spinner.finish_skipped("pip upgrade failed");
                    ui.warning(&format!("Could not upgrade pip: {}", e));
                }
            }
        }

        if !manifest.is_file() {
            tracing::debug!("No manifest at {}", manifest.display());
            ui.warning(&format!(
                "{} not found, skipping package install",
                manifest.display()
            ));
            return Ok(());
        }

        let mut spinner = ui.start_spinner("Installing requirements...");
        match self.packages.install_manifest(manifest) {
            Ok(()) => {
                spinner.finish_success("Requirements installed");
                Ok(())
            }
            Err(e) => {
                spinner.finish_error("Failed to install requirements");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::MockPackageManager;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Project {
        _temp: TempDir,
        layout: VenvLayout,
        manifest: PathBuf,
    }

    fn project(with_manifest: bool) -> Project {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("requirements.txt");
        if with_manifest {
            fs::write(&manifest, "requests\n").unwrap();
        }
        Project {
            layout: VenvLayout::new(temp.path().join("venv")),
            manifest,
            _temp: temp,
        }
    }

    #[test]
    fn fresh_environment_creates_upgrades_and_installs_once() {
        let p = project(true);
        let packages = MockPackageManager::new();
        let mut ui = MockUI::new();

        Provisioner::new(&packages)
            .provision(Path::new("python3"), &p.layout, &p.manifest, &mut ui)
            .unwrap();

        assert_eq!(
            packages.calls(),
            vec![
                "create".to_string(),
                "upgrade".to_string(),
                format!("install {}", p.manifest.display()),
            ]
        );
        assert!(p.layout.is_provisioned());
        assert!(ui.has_success("Requirements installed"));
    }

    #[test]
    fn creation_failure_is_fatal() {
        let p = project(true);
        let packages = MockPackageManager::new().failing_create();
        let mut ui = MockUI::new();

        let err = Provisioner::new(&packages)
            .provision(Path::new("python3"), &p.layout, &p.manifest, &mut ui)
            .unwrap_err();

        assert!(matches!(err, VenvbootError::EnvironmentCreationFailed { .. }));
        assert_eq!(packages.calls(), vec!["create"]);
        assert!(ui.has_error("Failed to create virtual environment"));
    }

    #[test]
    fn creation_without_marker_is_fatal() {
        let p = project(true);
        let packages = MockPackageManager::new().without_marker();
        let mut ui = MockUI::new();

        let err = Provisioner::new(&packages)
            .provision(Path::new("python3"), &p.layout, &p.manifest, &mut ui)
            .unwrap_err();

        assert!(matches!(err, VenvbootError::EnvironmentCreationFailed { .. }));
        assert_eq!(packages.count("install"), 0);
    }

    #[test]
    fn upgrade_failure_is_a_warning() {
        let p = project(true);
        let packages = MockPackageManager::new().failing_upgrade();
        let mut ui = MockUI::new();

        Provisioner::new(&packages)
            .provision(Path::new("python3"), &p.layout, &p.manifest, &mut ui)
            .unwrap();

        assert!(ui.has_warning("Could not upgrade pip"));
        assert_eq!(packages.count("install"), 1);
    }

    #[test]
    fn upgrade_can_be_disabled() {
        let p = project(true);
        let packages = MockPackageManager::new();
        let mut ui = MockUI::new();

        Provisioner::new(&packages)
            .upgrade_installer(false)
            .provision(Path::new("python3"), &p.layout, &p.manifest, &mut ui)
            .unwrap();

        assert_eq!(packages.count("upgrade"), 0);
        assert_eq!(packages.count("install"), 1);
    }

    #[test]
    fn install_failure_is_fatal() {
        let p = project(true);
        let packages = MockPackageManager::new().failing_install();
        let mut ui = MockUI::new();

        let err = Provisioner::new(&packages)
            .provision(Path::new("python3"), &p.layout, &p.manifest, &mut ui)
            .unwrap_err();

        assert!(matches!(err, VenvbootError::InstallFailed { .. }));
        assert!(ui.has_error("Failed to install requirements"));
    }

    #[test]
    fn missing_manifest_skips_install_with_warning() {
        let p = project(false);
        let packages = MockPackageManager::new();
        let mut ui = MockUI::new();

        Provisioner::new(&packages)
            .provision(Path::new("python3"), &p.layout, &p.manifest, &mut ui)
            .unwrap();

        assert_eq!(packages.count("install"), 0);
        assert!(ui.has_warning("not found, skipping package install"));
    }
}
