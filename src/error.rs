//! Error types.
//!
//! Every failure maps to a user-facing category: the key file could not
//! be read, the key could not be parsed, encryption was rejected, or the
//! standard streams failed.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    /// The key file is missing or unreadable.
    #[error("cannot read key file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// The plaintext could not be read from stdin.
    #[error("cannot read plaintext from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// The ciphertext could not be written to stdout.
    #[error("cannot write ciphertext to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json serialize error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Key parsing errors.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("invalid public key: key file is empty")]
    Empty,

    #[error("invalid public key: {0}")]
    Malformed(String),

    #[error("invalid public key: unsupported key type {0}")]
    Unsupported(String),
}

/// Encryption errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: plaintext is {len} bytes but the key can encrypt at most {capacity} bytes")]
    PlaintextTooLong { len: usize, capacity: usize },

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

impl Error {
    /// Stable name of the error category, used in diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            Self::FileAccess { .. } => "FileAccessError",
            Self::Key(_) => "KeyParseError",
            Self::Cipher(_) => "EncryptionError",
            Self::Stdin(_) | Self::Stdout(_) | Self::Io(_) => "IoError",
            Self::JsonSerialize(_) => "SerializeError",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
