//! travis-encrypt - Encrypt a CI secret with the repository's public key.
//!
//! Reads an RSA public key, encrypts standard input under it and prints
//! the ciphertext as one line of base64, ready to paste into a CI
//! configuration.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encrypt       # Default: stdin -> base64 ciphertext
//! │   ├── info          # Key format, size, fingerprint, capacity
//! │   ├── completions   # Shell completions
//! │   └── output        # Diagnostics on stderr
//! └── core/             # Core library components
//!     ├── key           # Public key parsing (PEM, DER, OpenSSH)
//!     ├── cipher/       # Padding schemes
//!     │   ├── mod       # Cipher trait and Padding selector
//!     │   ├── pkcs1     # RSAES-PKCS1-v1_5
//!     │   └── oaep      # RSAES-OAEP (SHA-256)
//!     ├── secret        # Pure encrypt-to-base64
//!     └── constants     # Paths and environment variable names
//! ```
//!
//! # Example
//!
//! ```no_run
//! let key = std::fs::read("etc/travis.key.txt")?;
//! let encoded = travis_encrypt::core::encrypt(&key, b"API_TOKEN=s3cret")?;
//! println!("{}", encoded);
//! # Ok::<(), travis_encrypt::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
