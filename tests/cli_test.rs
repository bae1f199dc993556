//! Integration tests for the venvboot binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn venvboot() -> Command {
    let mut cmd = Command::new(cargo_bin("venvboot"));
    cmd.env_remove("VENVBOOT_CONFIG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    venvboot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--project"))
        .stdout(predicate::str::contains("--config"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    venvboot()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_flag() -> Result<(), Box<dyn std::error::Error>> {
    venvboot().arg("--frobnicate").assert().failure();
    Ok(())
}

#[test]
fn cli_interpreter_not_found_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".venvboot.yml"),
        "interpreters: [/nonexistent/python9]\n",
    )?;
    fs::write(temp.path().join("requirements.txt"), "requests\n")?;

    venvboot()
        .arg("--project")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Python interpreter not found"));

    assert!(!temp.path().join("venv").exists());
    Ok(())
}

#[test]
fn cli_invalid_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".venvboot.yml"), "entrypoint: main.py\n")?;

    venvboot()
        .arg("--project")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_missing_explicit_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    venvboot()
        .arg("--project")
        .arg(temp.path())
        .arg("--config")
        .arg(temp.path().join("missing.yml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
    Ok(())
}

/// End-to-end runs against a fake interpreter.
///
/// The fake understands the handful of `python -m venv` / `python -m pip`
/// invocations venvboot makes, logs them to `calls.log` in the project
/// directory, and runs any other first argument as a shell script so that
/// `main.py` can be a plain shell snippet.
#[cfg(unix)]
mod fake_python {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    const FAKE_PYTHON: &str = r#"#!/bin/sh
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
    echo "venv $3" >> calls.log
    mkdir -p "$3/bin"
    cp "$0" "$3/bin/python"
    exit 0
fi
if [ "$1" = "-m" ] && [ "$2" = "pip" ]; then
    shift 2
    echo "pip $*" >> calls.log
    case "$1" in
        install)
            if [ "$2" = "-r" ] && [ -f fail-install ]; then exit 1; fi
            exit 0 ;;
        list)
            if [ -f installed.json ]; then cat installed.json; else echo "[]"; fi
            exit 0 ;;
        show)
            if [ -f show.txt ]; then cat show.txt; fi
            exit 0 ;;
    esac
    exit 1
fi
exec /bin/sh "$@"
"#;

    struct Project {
        temp: TempDir,
        interpreter: PathBuf,
    }

    impl Project {
        fn new(requirements: &str, main: &str) -> Self {
            let temp = TempDir::new().unwrap();
            let interpreter = temp.path().join("tools").join("python3");
            fs::create_dir_all(interpreter.parent().unwrap()).unwrap();
            fs::write(&interpreter, FAKE_PYTHON).unwrap();
            fs::set_permissions(&interpreter, fs::Permissions::from_mode(0o755)).unwrap();

            fs::write(temp.path().join("requirements.txt"), requirements).unwrap();
            fs::write(temp.path().join("main.py"), main).unwrap();
            fs::write(
                temp.path().join(".venvboot.yml"),
                format!("interpreters: [{}]\n", interpreter.display()),
            )
            .unwrap();

            Self { temp, interpreter }
        }

        fn root(&self) -> &Path {
            self.temp.path()
        }

        fn write(&self, name: &str, contents: &str) {
            fs::write(self.root().join(name), contents).unwrap();
        }

        fn calls(&self) -> Vec<String> {
            fs::read_to_string(self.root().join("calls.log"))
                .unwrap_or_default()
                .lines()
                .map(|l| l.to_string())
                .collect()
        }

        fn count(&self, prefix: &str) -> usize {
            self.calls().iter().filter(|c| c.starts_with(prefix)).count()
        }

        fn clear_calls(&self) {
            let _ = fs::remove_file(self.root().join("calls.log"));
        }

        fn run(&self) -> assert_cmd::assert::Assert {
            venvboot()
                .arg("--project")
                .arg(self.root())
                .env("CI", "true")
                .assert()
        }
    }

    #[test]
    fn first_run_provisions_installs_and_launches() {
        let project = Project::new("requests==2.31.0\n", "echo hello from main\n");

        project
            .run()
            .success()
            .stdout(predicate::str::contains("hello from main"))
            .stderr(predicate::str::contains("INFO").not());

        assert!(project.root().join("venv/bin/python").is_file());
        assert_eq!(project.count("venv"), 1);
        assert_eq!(project.count("pip install --upgrade pip"), 1);
        assert_eq!(project.count("pip install -r"), 1);
        assert_eq!(project.count("pip list"), 0);
        assert!(project.interpreter.is_file());
    }

    #[test]
    fn silent_run_prints_only_program_output() {
        let project = Project::new("requests\n", "echo hello\n");

        venvboot()
            .arg("--project")
            .arg(project.root())
            .arg("--silent")
            .env("CI", "true")
            .assert()
            .success()
            .stdout(predicate::str::diff("hello\n"))
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn silent_sync_failure_writes_nothing_to_stderr() {
        let project = Project::new("click\n", "echo hello\n");
        project.run().success();
        project.write("fail-install", "");

        venvboot()
            .arg("--project")
            .arg(project.root())
            .arg("--silent")
            .env("CI", "true")
            .assert()
            .success()
            .stdout(predicate::str::diff("hello\n"))
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn relative_project_dir_resolves_against_cwd() {
        let project = Project::new("requests\n", "echo hello from main\n");
        let parent = project.root().parent().unwrap();
        let name = project.root().file_name().unwrap();
        let interpreter = Path::new(name).join("tools").join("python3");
        project.write(
            ".venvboot.yml",
            &format!("interpreters: [{}]\n", interpreter.display()),
        );

        venvboot()
            .current_dir(parent)
            .arg("--project")
            .arg(name)
            .env("CI", "true")
            .assert()
            .success()
            .stdout(predicate::str::contains("hello from main"));

        assert!(project.root().join("venv/bin/python").is_file());
        assert!(!project.root().join(name).exists());
        assert_eq!(project.count("pip install -r"), 1);
    }

    #[test]
    fn exit_code_of_program_is_propagated() {
        let project = Project::new("", "exit 3\n");
        project.run().code(3);
    }

    #[test]
    fn first_install_failure_exits_one_without_launching() {
        let project = Project::new("requests\n", "echo should not run\n");
        project.write("fail-install", "");

        project
            .run()
            .code(1)
            .stdout(predicate::str::contains("should not run").not())
            .stderr(predicate::str::contains("Failed to install packages"));
    }

    #[test]
    fn second_run_reinstalls_missing_package_once() {
        let project = Project::new("requests==2.31.0\n# comment\n\nclick>=8.0\n", "exit 0\n");
        project.run().success();
        project.clear_calls();

        project.write(
            "installed.json",
            r#"[{"name": "requests", "version": "2.31.0"}, {"name": "urllib3", "version": "2.0"}]"#,
        );
        project.write(
            "show.txt",
            "Name: requests\nVersion: 2.31.0\nRequires: urllib3\n",
        );

        project
            .run()
            .success()
            .stdout(predicate::str::contains("Missing package: click"));

        assert_eq!(project.count("venv"), 0);
        assert_eq!(project.count("pip show requests click"), 1);
        assert_eq!(project.count("pip install -r"), 1);
    }

    #[test]
    fn second_run_with_everything_installed_does_not_reinstall() {
        let project = Project::new("Flask\n", "echo launched\n");
        project.run().success();
        project.clear_calls();

        project.write(
            "installed.json",
            r#"[{"name": "flask", "version": "2.0"}, {"name": "werkzeug", "version": "3.0"}]"#,
        );
        project.write("show.txt", "Name: Flask\nVersion: 2.0\nRequires: Werkzeug\n");

        project
            .run()
            .success()
            .stdout(predicate::str::contains("All packages satisfied"))
            .stdout(predicate::str::contains("launched"));

        assert_eq!(project.count("pip install"), 0);
    }

    #[test]
    fn sync_install_failure_is_only_a_warning() {
        let project = Project::new("click\n", "echo still launched\n");
        project.run().success();
        project.write("fail-install", "");

        project
            .run()
            .success()
            .stdout(predicate::str::contains("still launched"))
            .stderr(predicate::str::contains("Could not install missing packages"));
    }

    #[test]
    fn missing_entry_point_exits_one() {
        let project = Project::new("", "");
        fs::remove_file(project.root().join("main.py")).unwrap();

        project
            .run()
            .code(1)
            .stderr(predicate::str::contains("Entry point not found"));
    }
}
