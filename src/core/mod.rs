//! Core library components.
//!
//! Key parsing, the RSA padding schemes, and the pure
//! plaintext-to-base64 transformation. Nothing here touches stdin or
//! stdout.

pub mod cipher;
pub mod constants;
pub mod key;
pub mod secret;

pub use secret::{encrypt, encrypt_for, encrypt_with};
