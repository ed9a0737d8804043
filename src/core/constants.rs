//! Constants used throughout travis-encrypt.
//!
//! Centralizes magic strings and configuration values.

/// Default public key location, relative to the working directory.
pub const DEFAULT_KEY_PATH: &str = "etc/travis.key.txt";

/// Environment variable overriding the key path.
pub const KEY_ENV: &str = "TRAVIS_ENCRYPT_KEY";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "TRAVIS_ENCRYPT_LOG";

/// PKCS#1 public key PEM label.
pub const PKCS1_LABEL: &str = "RSA PUBLIC KEY";

/// SubjectPublicKeyInfo PEM label.
pub const SPKI_LABEL: &str = "PUBLIC KEY";

/// OpenSSH key type for RSA.
pub const SSH_RSA: &str = "ssh-rsa";
