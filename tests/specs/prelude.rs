//! Test helpers for behavioral specifications.
//!
//! A [`Project`] is a temp directory with an optional `bootrun.toml` and
//! a fake environment at `.venv` whose `bin/python` and `bin/pre-commit`
//! are shell scripts. They log every invocation to `.venv/calls.log`
//! and fail on marker files, so no real Python is needed.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the bootrun binary
pub fn bootrun_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bootrun"));
    for var in ["VIRTUAL_ENV", "BOOTRUN_CONFIG", "BOOTRUN_LOG", "COLOR"] {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Fake interpreter: pip installs succeed unless `fail-install` exists next
/// to `bin/`; pytest fails a suite containing a `FAIL` marker file.
const FAKE_PYTHON: &str = r#"#!/bin/sh
venv="$(cd "$(dirname "$0")/.." && pwd)"
echo "python $*" >> "$venv/calls.log"
if [ "$1" = "-m" ] && [ "$2" = "pip" ]; then
    if [ -e "$venv/fail-install" ]; then
        echo "ERROR: No matching distribution found for pytest" >&2
        exit 1
    fi
    echo "Successfully installed"
    exit 0
fi
if [ "$1" = "-m" ] && [ "$2" = "pytest" ]; then
    for arg in "$@"; do
        case "$arg" in
            --cov-report=xml:*) touch "${arg#--cov-report=xml:}" ;;
        esac
        suite="$arg"
    done
    if [ -e "$suite/FAIL" ]; then
        echo "FAILED $suite/test_it.py::test_it - assert 1 == 2"
        echo "1 failed, 2 passed in 0.02s"
        exit 1
    fi
    echo "$suite/test_it.py::test_it PASSED"
    echo "3 passed in 0.01s"
    exit 0
fi
exit 0
"#;

/// Fake hook runner: fails when `fail-hooks` exists next to `bin/`.
const FAKE_PRE_COMMIT: &str = r#"#!/bin/sh
venv="$(cd "$(dirname "$0")/.." && pwd)"
echo "pre-commit $*" >> "$venv/calls.log"
if [ "$1" = "run" ] && [ -e "$venv/fail-hooks" ]; then
    echo "ruff.....................................................Failed"
    exit 1
fi
exit 0
"#;

/// Temporary test project directory with helper methods.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a project with a fake environment at `.venv`
    #[cfg(unix)]
    pub fn with_fake_env() -> Self {
        let temp = Self::empty();
        temp.fake_env(".venv");
        temp
    }

    /// Install a fake environment at `path` (relative to the project)
    #[cfg(unix)]
    pub fn fake_env(&self, path: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let location = self.path().join(path);
        for (name, script) in [("python", FAKE_PYTHON), ("pre-commit", FAKE_PRE_COMMIT)] {
            let bin = location.join("bin").join(name);
            std::fs::create_dir_all(bin.parent().unwrap()).unwrap();
            std::fs::write(&bin, script).unwrap();
            std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
        location
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write bootrun.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let has_version = content
            .lines()
            .any(|l| l.split('=').next().is_some_and(|key| key.trim() == "version"));
        let content = if has_version {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("bootrun.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Create a passing test suite directory
    pub fn suite(&self, name: &str) {
        self.file(
            format!("{}/test_it.py", name),
            "def test_it():\n    assert True\n",
        );
    }

    /// Create a suite whose fake run fails
    pub fn failing_suite(&self, name: &str) {
        self.suite(name);
        self.file(format!("{}/FAIL", name), "");
    }

    /// Mark the fake environment's installs as failing
    pub fn fail_install(&self) {
        self.file(".venv/fail-install", "");
    }

    /// Mark the fake environment's hooks as failing
    pub fn fail_hooks(&self) {
        self.file(".venv/fail-hooks", "");
    }

    /// Lines the fake tools logged, in call order
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.path().join(".venv/calls.log"))
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    /// bootrun command running inside this project
    pub fn bootrun(&self, args: &[&str]) -> Command {
        let mut cmd = bootrun_cmd();
        cmd.args(args).current_dir(self.path());
        cmd
    }

    /// Run bootrun in this project and require an exit code
    pub fn exits(&self, args: &[&str], code: i32) -> RunAssert {
        run_exits(self.bootrun(args), code)
    }
}

/// Run a command and assert its exit code
pub fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit {}\nstdout:\n{}\nstderr:\n{}",
        code,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).expect("stdout should be valid JSON")
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}
