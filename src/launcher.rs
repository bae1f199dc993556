//! Running the entry-point program inside the environment.

use std::path::Path;

use crate::error::{Result, VenvbootError};
use crate::shell::{execute, CommandOptions};

/// Exit code reported when the program was killed by a signal.
pub const SIGNAL_EXIT_CODE: i32 = 1;

/// Run `entry_point` with the environment interpreter `python`.
///
/// The program gets the terminal: stdin, stdout and stderr are inherited
/// and nothing is captured. Returns the program's exit code, which the
/// caller passes on as its own. Fails only if the entry point does not
/// exist or the interpreter cannot be spawned.
pub fn launch(python: &Path, entry_point: &Path, cwd: &Path) -> Result<i32> {
    if !entry_point.is_file() {
        return Err(VenvbootError::EntryPointNotFound {
            path: entry_point.to_path_buf(),
        });
    }

    tracing::info!("Launching {}", entry_point.display());

    let options = CommandOptions {
        cwd: Some(cwd.to_path_buf()),
        inherit_stdin: true,
        ..Default::default()
    };
    let result = execute(python, &[entry_point.as_os_str()], &options)?;

    let code = result.exit_code.unwrap_or(SIGNAL_EXIT_CODE);
    tracing::debug!("{} exited with {}", entry_point.display(), code);
    Ok(code)
}
