mod common;

use common::{run_dictate, TestEnv};

#[test]
fn dictate_help_shows_usage() {
    let output = run_dictate(&["--help"]);
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
    assert!(
        !stderr.contains("No config file found"),
        "--help should not log config fallback noise\nstderr:\n{}",
        stderr
    );
}

#[test]
fn dictate_version_shows_version() {
    let output = run_dictate(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--version should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("dictate "));
    assert!(
        !stderr.contains("No config file found"),
        "--version should not log config fallback noise\nstderr:\n{}",
        stderr
    );
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_dictate(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("dictate"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_show_works() {
    let output = run_dictate(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[server]"));
    assert!(stdout.contains("base_url"));
    assert!(stdout.contains("[audio]"));
}

#[test]
fn config_init_writes_file() {
    let env = TestEnv::new();

    let output = env.run(&["config", "init"]);
    assert!(
        output.status.success(),
        "config init should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let config_path = env.config_path();
    assert!(config_path.exists(), "config file should exist after init");

    // A second init without --force must refuse to overwrite.
    let output = env.run(&["config", "init"]);
    assert!(
        !output.status.success(),
        "config init should fail when file exists"
    );
}

#[test]
fn config_from_file_overrides_defaults() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[server]
base_url = "http://example.invalid:9999"
"#,
    );

    let output = env.run(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains("http://example.invalid:9999"),
        "config show should reflect the file\nstdout:\n{}",
        stdout
    );
}

#[test]
fn env_var_overrides_server_url() {
    let env = TestEnv::new();

    let output = env.run_with_dead_server(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains("http://127.0.0.1:1"),
        "DICTATE_SERVER_URL should override the default\nstdout:\n{}",
        stdout
    );
}
