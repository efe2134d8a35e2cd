//! Behavioral specs for `bootrun lint`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const HOOK_CONFIG: &str = "repos:\n  - repo: local\n    hooks:\n      - id: ruff\n";

#[test]
fn installs_and_runs_hooks() {
    let temp = Project::with_fake_env();
    temp.file(".pre-commit-config.yaml", HOOK_CONFIG);

    temp.exits(&["lint"], 0);
    assert_eq!(
        temp.calls(),
        vec![
            "python -m pip install pytest pytest-cov pre-commit",
            "pre-commit install",
            "pre-commit run --all-files --show-diff-on-failure",
        ]
    );
}

#[test]
fn hook_failure_exits_one() {
    let temp = Project::with_fake_env();
    temp.file(".pre-commit-config.yaml", HOOK_CONFIG);
    temp.fail_hooks();

    temp.exits(&["lint"], 1).stdout_has("Failed");
}

#[test]
fn missing_hook_config_is_config_error() {
    let temp = Project::with_fake_env();

    temp.exits(&["lint"], 2).stderr_has("cannot read hook config");
    assert!(temp.calls().is_empty());
}

#[test]
fn install_can_be_skipped() {
    let temp = Project::with_fake_env();
    temp.config("[lint]\ninstall_hooks = false\nshow_diff_on_failure = false\n");
    temp.file(".pre-commit-config.yaml", HOOK_CONFIG);

    temp.exits(&["lint"], 0);
    assert_eq!(
        temp.calls().last().unwrap(),
        "pre-commit run --all-files"
    );
    assert!(!temp.calls().iter().any(|c| c == "pre-commit install"));
}

#[test]
fn custom_hook_config_reaches_install_and_run() {
    let temp = Project::with_fake_env();
    temp.config("[lint]\nconfig = \"ci/hooks.yaml\"\n");
    temp.file("ci/hooks.yaml", HOOK_CONFIG);

    temp.exits(&["lint"], 0);
    let calls = temp.calls();
    assert!(calls.contains(&"pre-commit install --config ci/hooks.yaml".to_string()));
    assert_eq!(
        calls.last().unwrap(),
        "pre-commit run --all-files --show-diff-on-failure --config ci/hooks.yaml"
    );
}
