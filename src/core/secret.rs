//! Encrypt a secret into the base64 form a CI configuration embeds.
//!
//! These functions are pure: they take key material and plaintext and
//! return text, leaving file and stream handling to the caller.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::core::cipher::Padding;
use crate::core::key::PublicKey;
use crate::error::Result;

/// Encrypt `plaintext` under the key in `key_material` with the default
/// padding and return the ciphertext as standard base64.
///
/// # Errors
///
/// Returns `Error::Key` if the key material does not parse, and
/// `Error::Cipher` if the plaintext does not fit.
pub fn encrypt(key_material: &[u8], plaintext: &[u8]) -> Result<String> {
    encrypt_with(key_material, plaintext, Padding::default())
}

/// Like [`encrypt`], with an explicit padding scheme.
pub fn encrypt_with(key_material: &[u8], plaintext: &[u8], padding: Padding) -> Result<String> {
    let key = PublicKey::parse(key_material)?;
    encrypt_for(&key, plaintext, padding)
}

/// Encrypt under an already parsed key.
pub fn encrypt_for(key: &PublicKey, plaintext: &[u8], padding: Padding) -> Result<String> {
    let ciphertext = padding.encrypt(key, plaintext)?;
    let encoded = STANDARD.encode(ciphertext);
    debug!(encoded_len = encoded.len(), "encoded ciphertext");
    Ok(encoded)
}
