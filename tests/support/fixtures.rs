//! Test fixtures and decryption helpers.
//!
//! All `test_1024.*` files encode the same key pair; `test_1024.key` is
//! its private half.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::{Oaep, Pkcs1v15Encrypt, RsaPrivateKey};
use sha2::Sha256;

pub const PKCS1_PEM: &str = "test_1024.pkcs1.pem";
pub const SPKI_PEM: &str = "test_1024.spki.pem";
pub const TRAVIS_PEM: &str = "test_1024.travis.pem";
pub const SSH_PUB: &str = "test_1024.ssh.pub";
pub const PKCS1_DER: &str = "test_1024.pkcs1.der";
pub const SPKI_DER: &str = "test_1024.spki.der";
pub const PRIVATE_PEM: &str = "test_1024.key";
pub const SPKI_2048: &str = "test_2048.spki.pem";
pub const SPKI_8192: &str = "test_8192.spki.pem";
pub const PKCS1_8192: &str = "test_8192.pkcs1.pem";
pub const EC_PEM: &str = "ec_p256.spki.pem";

/// Every encoding of the 1024-bit test key.
pub const ALL_1024: [&str; 6] = [PKCS1_PEM, SPKI_PEM, TRAVIS_PEM, SSH_PUB, PKCS1_DER, SPKI_DER];

/// Plaintext capacity of the 1024-bit key with PKCS#1 v1.5 padding.
pub const CAPACITY_1024: usize = 117;

/// Base64 length of a 1024-bit ciphertext.
pub const ENCODED_LEN_1024: usize = 172;

/// Read a fixture file.
pub fn fixture_bytes(name: &str) -> Vec<u8> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("missing fixture {}: {}", path.display(), e))
}

fn private_key() -> RsaPrivateKey {
    let pem = String::from_utf8(fixture_bytes(PRIVATE_PEM)).unwrap();
    RsaPrivateKey::from_pkcs1_pem(&pem).unwrap()
}

/// Decrypt a base64 PKCS#1 v1.5 ciphertext with the test private key.
pub fn decrypt(encoded: &str) -> Vec<u8> {
    let ciphertext = STANDARD.decode(encoded).expect("output is not base64");
    private_key()
        .decrypt(Pkcs1v15Encrypt, &ciphertext)
        .expect("ciphertext does not decrypt")
}

/// Decrypt a base64 OAEP-SHA256 ciphertext with the test private key.
pub fn decrypt_oaep(encoded: &str) -> Vec<u8> {
    let ciphertext = STANDARD.decode(encoded).expect("output is not base64");
    private_key()
        .decrypt(Oaep::new::<Sha256>(), &ciphertext)
        .expect("ciphertext does not decrypt")
}
