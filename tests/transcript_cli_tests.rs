mod common;

use common::TestEnv;

#[test]
fn delete_without_confirmation_is_cancelled() {
    // stdin is closed, so the [y/N] prompt reads EOF and declines.
    let output = TestEnv::new().run_with_dead_server(&["delete", "1"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "a declined deletion is not an error\nstdout:\n{}\nstderr:\n{}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        stdout.contains("Deletion cancelled"),
        "declining should be reported\nstdout:\n{}",
        stdout
    );
}

#[test]
fn delete_with_yes_fails_against_dead_server() {
    // --yes skips the prompt, so the request is actually issued.
    let output = TestEnv::new().run_with_dead_server(&["delete", "1", "--yes"]);

    assert!(
        !output.status.success(),
        "delete should fail when the server is unreachable\nstdout:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("Error"),
        "failure should be surfaced on stderr\nstderr:\n{}",
        stderr
    );
}

#[test]
fn list_fails_against_dead_server() {
    let output = TestEnv::new().run_with_dead_server(&["list"]);

    assert!(
        !output.status.success(),
        "list should fail when the server is unreachable\nstdout:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn view_requires_numeric_id() {
    let output = TestEnv::new().run(&["view", "not-a-number"]);

    assert!(
        !output.status.success(),
        "view should reject a non-numeric id"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid value"),
        "clap should reject the argument\nstderr:\n{}",
        stderr
    );
}
