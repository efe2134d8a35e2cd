//! Behavioral specs for `bootrun env`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn describes_reused_environment() {
    let temp = Project::with_fake_env();
    temp.config("python_versions = [\"3.10\", \"3.11\"]\n");

    temp.exits(&["env"], 0)
        .stdout_has("(reused)")
        .stdout_has("python versions: 3.10, 3.11");
    assert_eq!(temp.calls(), vec!["python -m pip install pytest pytest-cov"]);
}

#[test]
fn runs_no_suites() {
    let temp = Project::with_fake_env();
    temp.config("[tests]\nsuites = [\"a\"]\n");
    temp.suite("a");

    temp.exits(&["env"], 0);
    assert!(!temp.calls().iter().any(|c| c.contains("pytest -v")));
}

#[test]
fn install_failure_exits_with_setup_code() {
    let temp = Project::with_fake_env();
    temp.fail_install();

    temp.exits(&["env"], 4).stderr_has("environment setup failed");
}
