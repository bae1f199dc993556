//! Run command implementation.
//!
//! Prepares the project's environment and launches its entry point.

use std::path::{Path, PathBuf};

use crate::config::{load_config, ProjectPaths};
use crate::environment::InterpreterLocator;
use crate::error::Result;
use crate::package::Pip;
use crate::runner::Bootstrap;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    pip_output: bool,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: None,
            pip_output: false,
        }
    }

    /// Use an explicit config file instead of `.venvboot.yml`.
    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config = config;
        self
    }

    /// Stream pip's own output instead of capturing it.
    pub fn with_pip_output(mut self, enabled: bool) -> Self {
        self.pip_output = enabled;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn project_name(&self) -> String {
        self.project_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.project_root.display().to_string())
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config.as_deref())?;
        let paths = ProjectPaths::resolve(&self.project_root, &config);

        ui.show_header(&self.project_name());

        let pip = Pip::new(paths.venv.python(), &paths.root).with_output(self.pip_output);
        let locator = InterpreterLocator::with_candidates(config.interpreters.clone());
        let locate = || locator.locate();

        let exit_code = Bootstrap::new(&paths, &pip, &locate)
            .upgrade_installer(config.upgrade_installer)
            .run(ui)?;

        Ok(CommandResult::from_exit_code(exit_code))
    }
}
