//! The package-manager seam and its pip implementation.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{Result, VenvbootError};
use crate::shell::{display_command, execute, execute_quiet, CommandOptions, CommandResult};

use super::metadata::{
    parse_freeze, parse_installed_json, parse_show_output, InstalledPackage, PackageMetadata,
};
use super::name::PackageName;

/// The capabilities venvboot needs from a package-management tool.
///
/// Everything about resolution and environment internals stays behind this
/// trait; the rest of the crate only sees these five operations.
pub trait PackageManager {
    /// Create a virtual environment at `venv_dir` using a system interpreter.
    fn create_environment(&self, interpreter: &Path, venv_dir: &Path) -> Result<()>;

    /// Upgrade the installer inside the environment to its latest version.
    fn upgrade_installer(&self) -> Result<()>;

    /// Install everything listed in a requirements manifest.
    fn install_manifest(&self, manifest: &Path) -> Result<()>;

    /// List the packages currently installed in the environment.
    fn installed_packages(&self) -> Result<Vec<InstalledPackage>>;

    /// Look up metadata for the given packages.
    ///
    /// Packages that are not installed are simply absent from the result;
    /// a failing lookup returns an empty list rather than an error.
    fn package_metadata(&self, names: &[PackageName]) -> Vec<PackageMetadata>;
}

/// [`PackageManager`] backed by `python -m pip` inside the environment.
#[derive(Debug, Clone)]
pub struct Pip {
    python: PathBuf,
    cwd: PathBuf,
    show_output: bool,
}

impl Pip {
    /// Create a pip driver for the environment interpreter at `python`.
    ///
    /// Commands run with `cwd` as working directory so that relative paths
    /// inside the manifest resolve against the project.
    pub fn new(python: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
            cwd: cwd.into(),
            show_output: false,
        }
    }

    /// Stream creation and install output to the terminal instead of capturing it.
    pub fn with_output(mut self, show_output: bool) -> Self {
        self.show_output = show_output;
        self
    }

    fn options(&self, capture: bool) -> CommandOptions {
        CommandOptions {
            cwd: Some(self.cwd.clone()),
            capture_stdout: capture,
            capture_stderr: capture,
            ..Default::default()
        }
    }

    /// Run a long-running command, showing its output in verbose mode.
    fn run_visible<S: AsRef<OsStr>>(&self, program: &Path, args: &[S]) -> Result<CommandResult> {
        execute(program, args, &self.options(!self.show_output))
    }

    /// Arguments for `python -m pip <args>`.
    fn pip(&self, args: &[&OsStr]) -> Vec<OsString> {
        let mut full: Vec<OsString> = vec!["-m".into(), "pip".into()];
        full.extend(args.iter().map(|a| a.to_os_string()));
        full.push("--disable-pip-version-check".into());
        full
    }

    fn list(&self, format: &str) -> Result<CommandResult> {
        let args = self.pip(&[OsStr::new("list"), OsStr::new(format)]);
        let result = execute_quiet(&self.python, &args, Some(self.cwd.as_path()))?;
        if !result.success {
            return Err(VenvbootError::CommandFailed {
                command: display_command(&self.python, &args),
                code: result.exit_code,
            });
        }
        Ok(result)
    }
}

impl PackageManager for Pip {
    fn create_environment(&self, interpreter: &Path, venv_dir: &Path) -> Result<()> {
        let args = [OsStr::new("-m"), OsStr::new("venv"), venv_dir.as_os_str()];
        let result = self.run_visible(interpreter, &args).map_err(|e| {
            VenvbootError::EnvironmentCreationFailed {
                path: venv_dir.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        if result.success {
            Ok(())
        } else {
            Err(VenvbootError::EnvironmentCreationFailed {
                path: venv_dir.to_path_buf(),
                message: result.failure_reason(),
            })
        }
    }

    fn upgrade_installer(&self) -> Result<()> {
        let args = self.pip(&[
            OsStr::new("install"),
            OsStr::new("--upgrade"),
            OsStr::new("pip"),
        ]);
        let result = self.run_visible(&self.python, &args)?;
        if result.success {
            Ok(())
        } else {
            Err(VenvbootError::CommandFailed {
                command: display_command(&self.python, &args),
                code: result.exit_code,
            })
        }
    }

    fn install_manifest(&self, manifest: &Path) -> Result<()> {
        let args = self.pip(&[
            OsStr::new("install"),
            OsStr::new("-r"),
            manifest.as_os_str(),
        ]);
        let result =
            self.run_visible(&self.python, &args)
                .map_err(|e| VenvbootError::InstallFailed {
                    manifest: manifest.to_path_buf(),
                    message: e.to_string(),
                })?;

        if result.success {
            Ok(())
        } else {
            Err(VenvbootError::InstallFailed {
                manifest: manifest.to_path_buf(),
                message: result.failure_reason(),
            })
        }
    }

    fn installed_packages(&self) -> Result<Vec<InstalledPackage>> {
        let result = self.list("--format=json")?;
        match parse_installed_json(&result.stdout) {
            Ok(packages) => Ok(packages),
            Err(e) => {
                tracing::debug!(
                    "pip list JSON unreadable ({}), falling back to freeze format",
                    e
                );
                let result = self.list("--format=freeze")?;
                Ok(parse_freeze(&result.stdout))
            }
        }
    }

    fn package_metadata(&self, names: &[PackageName]) -> Vec<PackageMetadata> {
        if names.is_empty() {
            return Vec::new();
        }

        let mut show: Vec<&OsStr> = vec![OsStr::new("show")];
        show.extend(names.iter().map(|n| OsStr::new(n.as_str())));
        let args = self.pip(&show);

        // pip exits non-zero when any name is unknown but still reports the rest
        match execute_quiet(&self.python, &args, Some(self.cwd.as_path())) {
            Ok(result) => parse_show_output(&result.stdout),
            Err(e) => {
                tracing::debug!("Metadata lookup failed: {}", e);
                Vec::new()
            }
        }
    }
}
