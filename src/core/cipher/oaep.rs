//! RSAES-OAEP encryption with SHA-256.

use rsa::Oaep;
use sha2::Sha256;

use super::Cipher;
use crate::core::key::PublicKey;
use crate::error::{CipherError, Result};

/// SHA-256 digest length.
const HASH_LEN: usize = 32;

/// OAEP with SHA-256 for both the label hash and MGF1.
pub struct OaepSha256;

impl Cipher for OaepSha256 {
    fn name(&self) -> &'static str {
        "oaep"
    }

    fn overhead(&self) -> usize {
        2 * HASH_LEN + 2
    }

    fn encrypt(&self, key: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut rng = rand::thread_rng();
        key.as_rsa()
            .encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)).into())
    }
}
