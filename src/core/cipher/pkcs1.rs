//! RSAES-PKCS1-v1_5 encryption.

use rsa::Pkcs1v15Encrypt;

use super::Cipher;
use crate::core::key::PublicKey;
use crate::error::{CipherError, Result};

/// PKCS#1 v1.5 padding: `00 02 <random non-zero bytes> 00 <message>`.
pub struct Pkcs1;

impl Cipher for Pkcs1 {
    fn name(&self) -> &'static str {
        "pkcs1v15"
    }

    fn overhead(&self) -> usize {
        11
    }

    fn encrypt(&self, key: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut rng = rand::thread_rng();
        key.as_rsa()
            .encrypt(&mut rng, Pkcs1v15Encrypt, plaintext)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)).into())
    }
}
