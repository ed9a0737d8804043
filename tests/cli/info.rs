//! Tests for the `info` command.

use crate::support::*;

#[test]
fn test_info_human_output() {
    let t = Test::with_key(TRAVIS_PEM);

    let output = t.info();
    assert_success(&output);
    assert_stdout_contains(&output, "1024 bits");
    assert_stdout_contains(&output, "65537");
    assert_stdout_contains(&output, "SHA256:");
    assert_stdout_contains(&output, "RSA PUBLIC KEY label");
    assert_stdout_contains(&output, "up to 117 bytes");
    assert_stdout_contains(&output, "up to 62 bytes");
}

#[test]
fn test_info_json() {
    let t = Test::with_key(SSH_PUB);

    let output = t.info_json();
    assert_success(&output);
    let info: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(info["format"], "openssh");
    assert_eq!(info["bits"], 1024);
    assert_eq!(info["exponent"], "65537");
    assert_eq!(info["capacity"][0]["padding"], "pkcs1v15");
    assert_eq!(info["capacity"][0]["bytes"], 117);
    assert_eq!(info["capacity"][1]["padding"], "oaep");
    assert_eq!(info["capacity"][1]["bytes"], 62);
}

#[test]
fn test_info_fingerprint_matches_across_encodings() {
    let fingerprints: Vec<serde_json::Value> = ALL_1024
        .iter()
        .map(|fixture| {
            let t = Test::with_key(fixture);
            let output = t.info_json();
            assert_success(&output);
            let info: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
            info["fingerprint"].clone()
        })
        .collect();

    assert!(fingerprints.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_info_2048_bit_key() {
    let t = Test::with_key(SPKI_2048);

    let output = t.info_json();
    assert_success(&output);
    let info: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(info["format"], "spki-pem");
    assert_eq!(info["bits"], 2048);
    assert_eq!(info["capacity"][0]["bytes"], 245);
}

#[test]
fn test_info_8192_bit_key() {
    let t = Test::with_key(SPKI_8192);

    let output = t.info_json();
    assert_success(&output);
    let info: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(info["bits"], 8192);
    assert_eq!(info["capacity"][0]["bytes"], 1013);
    assert_eq!(info["capacity"][1]["bytes"], 958);
}

#[test]
fn test_info_missing_key() {
    let t = Test::new();

    let output = t.info();
    assert_failure(&output);
    assert_stderr_contains(&output, "FileAccessError");
}

#[test]
fn test_info_respects_global_key_flag() {
    let t = Test::new();
    let key = t.write_file("other.der", &fixture_bytes(SPKI_DER));

    let output = t
        .cmd()
        .args(["info", "--json", "--key", key.to_str().unwrap()])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "spki-der");
}
