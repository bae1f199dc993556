//! The bootstrap state machine.
//!
//! ```text
//! Locate -> Provision ----\
//!                          +--> Launch -> Exit
//! (marker) -> Synchronize -/
//! ```
//!
//! Locate and Provision stop the run on failure. Synchronize never does.

use std::path::PathBuf;

use crate::config::ProjectPaths;
use crate::error::Result;
use crate::launcher::launch;
use crate::package::PackageManager;
use crate::requirements::{synchronize, SyncOutcome};
use crate::environment::Provisioner;
use crate::ui::UserInterface;

/// Which branch the preparation phase took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prepared {
    /// The environment was created and fully installed.
    Provisioned,
    /// The environment already existed and was synchronized.
    Synchronized(SyncOutcome),
}

/// Drives one bootstrap run for a project.
pub struct Bootstrap<'a> {
    paths: &'a ProjectPaths,
    packages: &'a dyn PackageManager,
    locate: &'a dyn Fn() -> Result<PathBuf>,
    upgrade_installer: bool,
}

impl<'a> Bootstrap<'a> {
    /// Create a run over `paths`.
    ///
    /// `locate` finds the system interpreter; it is only called when the
    /// environment has to be created.
    pub fn new(
        paths: &'a ProjectPaths,
        packages: &'a dyn PackageManager,
        locate: &'a dyn Fn() -> Result<PathBuf>,
    ) -> Self {
        Self {
            paths,
            packages,
            locate,
            upgrade_installer: true,
        }
    }

    /// Whether to upgrade pip after creating the environment.
    pub fn upgrade_installer(mut self, enabled: bool) -> Self {
        self.upgrade_installer = enabled;
        self
    }

    /// Make sure the environment exists and matches the manifest.
    pub fn prepare(&self, ui: &mut dyn UserInterface) -> Result<Prepared> {
        if self.paths.venv.is_provisioned() {
            tracing::debug!(
                "Found {}, synchronizing",
                self.paths.venv.python().display()
            );
            let outcome = synchronize(&self.paths.manifest, self.packages, ui);
            return Ok(Prepared::Synchronized(outcome));
        }

        tracing::debug!(
            "No environment at {}, provisioning",
            self.paths.venv.root().display()
        );
        let interpreter = (self.locate)()?;
        tracing::info!("Using interpreter {}", interpreter.display());

        Provisioner::new(self.packages)
            .upgrade_installer(self.upgrade_installer)
            .provision(&interpreter, &self.paths.venv, &self.paths.manifest, ui)?;
        Ok(Prepared::Provisioned)
    }

    /// Prepare the environment, then launch the entry point.
    ///
    /// Returns the launched program's exit code.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<i32> {
        self.prepare(ui)?;
        launch(
            &self.paths.venv.python(),
            &self.paths.entry_point,
            &self.paths.root,
        )
    }
}
