//! RSA encryption schemes.
//!
//! ## Schemes
//!
//! - **pkcs1v15**: Default. RSAES-PKCS1-v1_5, what CI providers decrypt.
//! - **oaep**: RSAES-OAEP with SHA-256, for consumers that support it.
//!
//! Both use randomized padding, so encrypting the same plaintext twice
//! yields different ciphertexts of the same length (the modulus size).

use clap::ValueEnum;
use serde::Serialize;
use tracing::trace;

use crate::core::key::PublicKey;
use crate::error::{CipherError, Result};

mod oaep;
mod pkcs1;

pub use oaep::OaepSha256;
pub use pkcs1::Pkcs1;

/// RSA encryption scheme.
pub trait Cipher {
    /// Scheme name for display.
    fn name(&self) -> &'static str;

    /// Bytes of padding the scheme adds to every message.
    fn overhead(&self) -> usize;

    /// Largest plaintext, in bytes, this scheme can encrypt under `key`.
    fn capacity(&self, key: &PublicKey) -> usize {
        key.size().saturating_sub(self.overhead())
    }

    /// Encrypt `plaintext` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` if the primitive rejects
    /// the input.
    fn encrypt(&self, key: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>>;
}

/// Padding scheme selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    /// RSAES-PKCS1-v1_5
    #[default]
    #[value(name = "pkcs1v15")]
    Pkcs1v15,

    /// RSAES-OAEP with SHA-256
    #[value(name = "oaep")]
    Oaep,
}

impl Padding {
    /// All schemes, in display order.
    pub const ALL: [Padding; 2] = [Padding::Pkcs1v15, Padding::Oaep];

    fn cipher(self) -> &'static dyn Cipher {
        match self {
            Self::Pkcs1v15 => &Pkcs1,
            Self::Oaep => &OaepSha256,
        }
    }

    /// Scheme name for display.
    pub fn name(self) -> &'static str {
        self.cipher().name()
    }

    /// Largest plaintext, in bytes, that fits under `key`.
    pub fn capacity(self, key: &PublicKey) -> usize {
        self.cipher().capacity(key)
    }

    /// Encrypt `plaintext` under `key`.
    ///
    /// The output is always exactly `key.size()` bytes.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::PlaintextTooLong` if the plaintext exceeds
    /// the capacity, checked before the primitive runs.
    pub fn encrypt(self, key: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = self.cipher();
        let capacity = cipher.capacity(key);
        if plaintext.len() > capacity {
            return Err(CipherError::PlaintextTooLong {
                len: plaintext.len(),
                capacity,
            }
            .into());
        }

        trace!(
            scheme = cipher.name(),
            plaintext_len = plaintext.len(),
            capacity,
            "encrypting"
        );
        let ciphertext = cipher.encrypt(key, plaintext)?;
        trace!(ciphertext_len = ciphertext.len(), "encrypted");

        Ok(ciphertext)
    }
}
