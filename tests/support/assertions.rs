//! Test assertion helpers.

use std::process::Output;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command failed and wrote nothing to stdout.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
    assert!(
        output.stdout.is_empty(),
        "failed command wrote to stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert the output is one newline-terminated base64 line and return it
/// without the newline.
pub fn ciphertext_line(output: &Output) -> String {
    assert_success(output);
    let out = stdout(output);
    assert!(out.ends_with('\n'), "output is not newline-terminated");
    let line = out.trim_end_matches('\n');
    assert!(!line.contains('\n'), "output spans several lines: {}", out);
    line.to_string()
}
