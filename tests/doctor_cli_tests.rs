mod common;

use common::TestEnv;

#[test]
fn doctor_subcommand_is_available() {
    let output = TestEnv::new().run(&["doctor", "--help"]);

    assert!(
        output.status.success(),
        "doctor --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn doctor_runs_even_when_server_is_down() {
    let output = TestEnv::new().run_with_dead_server(&["doctor"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "doctor should report problems, not fail\nstdout:\n{}\nstderr:\n{}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("server"));
    assert!(
        stdout.contains("unreachable"),
        "doctor should flag the dead server\nstdout:\n{}",
        stdout
    );
}

#[test]
fn doctor_json_emits_parseable_report() {
    let output = TestEnv::new().run_with_dead_server(&["doctor", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "doctor --json should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("doctor --json should emit valid JSON");
    assert!(report["checks"].is_array());
    assert_eq!(report["server"], "http://127.0.0.1:1");
}
