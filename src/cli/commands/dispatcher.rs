//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for turning parsed flags into a command

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::UserInterface;

use super::run::RunCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Result mirroring a child process exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }

    /// Exit status for this process.
    ///
    /// Codes outside `0..=255` become 1 so a failure never truncates to 0.
    pub fn process_exit_code(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Dispatches the CLI invocation to its command.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute the command for `cli`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cmd = RunCommand::new(&self.project_root)
            .with_config(cli.config.clone())
            .with_pip_output(ui.output_mode().shows_command_output());
        cmd.execute(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn command_result_from_exit_code() {
        assert_eq!(CommandResult::from_exit_code(0), CommandResult::success());
        assert_eq!(CommandResult::from_exit_code(3), CommandResult::failure(3));
    }

    #[test]
    fn process_exit_code_passes_byte_codes_through() {
        assert_eq!(CommandResult::success().process_exit_code(), 0);
        assert_eq!(CommandResult::failure(3).process_exit_code(), 3);
        assert_eq!(CommandResult::failure(255).process_exit_code(), 255);
    }

    #[test]
    fn process_exit_code_never_turns_failure_into_success() {
        assert_eq!(CommandResult::failure(256).process_exit_code(), 1);
        assert_eq!(CommandResult::failure(512).process_exit_code(), 1);
        assert_eq!(CommandResult::failure(-1).process_exit_code(), 1);
    }

    #[test]
    fn dispatcher_keeps_project_root() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/work/app"));
        assert_eq!(dispatcher.project_root(), Path::new("/work/app"));
    }
}
