mod common;

use common::{run_callsight, TestEnv};

#[test]
fn callsight_help_shows_usage() {
    let output = run_callsight(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("analyze"));
}

#[test]
fn callsight_version_shows_version() {
    let output = run_callsight(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--version should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("callsight "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_callsight(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("callsight"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_show_works() {
    let output = run_callsight(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[general]"));
    assert!(stdout.contains("[llm]"));
    assert!(stdout.contains("gpt-4o-mini"));
}

#[test]
fn config_set_persists_value() {
    let env = TestEnv::new();

    let output = env.run(&["config", "set", "llm.model", "gpt-4-turbo"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config set should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("llm.model"));

    let output = env.run(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("gpt-4-turbo"),
        "config show should reflect the new value\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_set_rejects_unknown_key() {
    let env = TestEnv::new();

    let output = env.run(&["config", "set", "audio.backend", "cpal"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !output.status.success(),
        "unknown key should fail\nstderr:\n{}",
        stderr
    );
    assert!(
        stderr.contains("Unknown config key"),
        "expected unknown-key error, got:\n{}",
        stderr
    );
}

#[test]
fn config_path_returns_valid_path() {
    let output = run_callsight(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config path should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("config.toml"));
}
