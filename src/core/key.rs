//! RSA public key loading.
//!
//! Accepts the encodings found in the wild for repository keys:
//!
//! - PKCS#1 PEM (`-----BEGIN RSA PUBLIC KEY-----`)
//! - SubjectPublicKeyInfo PEM (`-----BEGIN PUBLIC KEY-----`)
//! - SubjectPublicKeyInfo body under a PKCS#1 label, as served by the
//!   Travis CI API
//! - OpenSSH (`ssh-rsa AAAA... comment`)
//! - binary DER, either PKCS#1 or SubjectPublicKeyInfo

use std::fmt;
use std::path::Path;

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine;
use rsa::pkcs1;
use rsa::pkcs8::der::{Decode, Document};
use rsa::pkcs8::{EncodePublicKey, SubjectPublicKeyInfoRef};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPublicKey};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, trace};

use crate::core::constants::{PKCS1_LABEL, SPKI_LABEL, SSH_RSA};
use crate::error::{Error, KeyError, Result};

/// ASN.1 SEQUENCE tag; every DER-encoded key starts with it.
const DER_SEQUENCE: u8 = 0x30;

/// Largest modulus accepted, in bits.
pub const MAX_MODULUS_BITS: usize = 16384;

/// Encoding a key was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyFormat {
    Pkcs1Pem,
    SpkiPem,
    /// SubjectPublicKeyInfo body wrapped in an `RSA PUBLIC KEY` label.
    TravisPem,
    Pkcs1Der,
    SpkiDer,
    #[serde(rename = "openssh")]
    OpenSsh,
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pkcs1Pem => "PKCS#1 PEM",
            Self::SpkiPem => "SPKI PEM",
            Self::TravisPem => "SPKI PEM (RSA PUBLIC KEY label)",
            Self::Pkcs1Der => "PKCS#1 DER",
            Self::SpkiDer => "SPKI DER",
            Self::OpenSsh => "OpenSSH",
        };
        f.write_str(name)
    }
}

/// A parsed RSA public key and the encoding it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicKey {
    inner: RsaPublicKey,
    format: KeyFormat,
}

impl PublicKey {
    /// Read and parse a key file.
    ///
    /// # Errors
    ///
    /// Returns `Error::FileAccess` if the file cannot be read, and
    /// `Error::Key` if its contents are not an RSA public key.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading public key");

        let material = std::fs::read(path).map_err(|source| Error::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&material)
    }

    /// Parse key material in any supported encoding.
    ///
    /// # Errors
    ///
    /// Returns `Error::Key` if the material is empty, malformed, or not
    /// an RSA public key.
    pub fn parse(material: &[u8]) -> Result<Self> {
        let (inner, format) = if material.first() == Some(&DER_SEQUENCE) {
            parse_der(material)?
        } else {
            let text = std::str::from_utf8(material).map_err(|_| {
                KeyError::Malformed("key is neither text nor DER".to_string())
            })?;
            parse_text(text)?
        };

        debug!(%format, bits = inner.n().bits(), "parsed public key");
        Ok(Self { inner, format })
    }

    /// Encoding the key was read from.
    pub fn format(&self) -> KeyFormat {
        self.format
    }

    /// Modulus length in bytes; also the ciphertext length.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Modulus length in bits.
    pub fn bits(&self) -> usize {
        self.inner.n().bits()
    }

    /// Public exponent in decimal.
    pub fn exponent(&self) -> String {
        self.inner.e().to_string()
    }

    /// SHA-256 over the SubjectPublicKeyInfo DER, as `SHA256:<base64>`.
    ///
    /// Identical for a given key whichever encoding it was read from.
    pub fn fingerprint(&self) -> Result<String> {
        let der = self
            .inner
            .to_public_key_der()
            .map_err(|e| KeyError::Malformed(e.to_string()))?;
        let digest = Sha256::digest(der.as_bytes());
        Ok(format!("SHA256:{}", STANDARD_NO_PAD.encode(digest)))
    }

    pub(crate) fn as_rsa(&self) -> &RsaPublicKey {
        &self.inner
    }
}

/// Structure found inside a DER document.
#[derive(Clone, Copy)]
enum Body {
    Pkcs1,
    Spki,
}

fn parse_der(der: &[u8]) -> std::result::Result<(RsaPublicKey, KeyFormat), KeyError> {
    trace!(len = der.len(), "trying DER");

    decode_der(der).map(|(key, body)| match body {
        Body::Pkcs1 => (key, KeyFormat::Pkcs1Der),
        Body::Spki => (key, KeyFormat::SpkiDer),
    })
}

/// Decode a PKCS#1 or SubjectPublicKeyInfo document into a key.
///
/// Only the ASN.1 structure is decoded here; the modulus bound is applied
/// by [`from_parts`], not by the rsa crate's 4096-bit default.
fn decode_der(der: &[u8]) -> std::result::Result<(RsaPublicKey, Body), KeyError> {
    if let Ok(body) = pkcs1::RsaPublicKey::from_der(der) {
        let key = from_parts(body.modulus.as_bytes(), body.public_exponent.as_bytes())?;
        return Ok((key, Body::Pkcs1));
    }

    let spki = SubjectPublicKeyInfoRef::from_der(der)
        .map_err(|e| KeyError::Malformed(format!("DER key: {}", e)))?;
    if spki.algorithm.oid != pkcs1::ALGORITHM_OID {
        return Err(KeyError::Unsupported(format!(
            "algorithm {}",
            spki.algorithm.oid
        )));
    }
    let bits = spki
        .subject_public_key
        .as_bytes()
        .ok_or_else(|| KeyError::Malformed("SPKI key bits are not byte aligned".to_string()))?;
    let body = pkcs1::RsaPublicKey::from_der(bits)
        .map_err(|e| KeyError::Malformed(format!("SPKI key: {}", e)))?;
    let key = from_parts(body.modulus.as_bytes(), body.public_exponent.as_bytes())?;
    Ok((key, Body::Spki))
}

/// Build a key from big-endian modulus and exponent bytes.
fn from_parts(n: &[u8], e: &[u8]) -> std::result::Result<RsaPublicKey, KeyError> {
    RsaPublicKey::new_with_max_size(
        BigUint::from_bytes_be(n),
        BigUint::from_bytes_be(e),
        MAX_MODULUS_BITS,
    )
    .map_err(|err| match err {
        rsa::Error::ModulusTooLarge => KeyError::Unsupported(format!(
            "modulus larger than {} bits",
            MAX_MODULUS_BITS
        )),
        other => KeyError::Malformed(other.to_string()),
    })
}

fn parse_text(text: &str) -> std::result::Result<(RsaPublicKey, KeyFormat), KeyError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(KeyError::Empty);
    }

    if text.starts_with("ssh-") || text.starts_with("ecdsa-") {
        return parse_openssh(text).map(|key| (key, KeyFormat::OpenSsh));
    }

    let label = pem_label(text).ok_or_else(|| {
        KeyError::Malformed("no PEM armor or OpenSSH key found".to_string())
    })?;
    if label != PKCS1_LABEL && label != SPKI_LABEL {
        return Err(if label.contains("PRIVATE KEY") {
            KeyError::Unsupported(format!("{} (a public key is required)", label))
        } else {
            KeyError::Unsupported(label.to_string())
        });
    }
    trace!(label, "trying PEM");

    let armored = normalize_armor(text);
    let (_, document) = Document::from_pem(&armored)
        .map_err(|e| KeyError::Malformed(format!("{} PEM: {}", label, e)))?;
    let (key, body) = decode_der(document.as_bytes())?;

    // Travis CI serves an SPKI body under the PKCS#1 label.
    let format = match (label, body) {
        (PKCS1_LABEL, Body::Spki) => KeyFormat::TravisPem,
        (_, Body::Pkcs1) => KeyFormat::Pkcs1Pem,
        (_, Body::Spki) => KeyFormat::SpkiPem,
    };
    Ok((key, format))
}

/// Label of the first PEM pre-encapsulation boundary, if any.
fn pem_label(text: &str) -> Option<&str> {
    const BEGIN: &str = "-----BEGIN ";
    let start = text.find(BEGIN)? + BEGIN.len();
    let rest = &text[start..];
    let end = rest.find("-----")?;
    Some(&rest[..end])
}

/// Drop anything before the armor and normalize line endings.
fn normalize_armor(text: &str) -> String {
    let start = text.find("-----BEGIN ").unwrap_or(0);
    let mut armored = text[start..].replace("\r\n", "\n");
    if !armored.ends_with('\n') {
        armored.push('\n');
    }
    armored
}

fn parse_openssh(line: &str) -> std::result::Result<RsaPublicKey, KeyError> {
    let mut fields = line.split_whitespace();
    let kind = fields.next().unwrap_or_default();
    if kind != SSH_RSA {
        return Err(KeyError::Unsupported(kind.to_string()));
    }

    let blob = fields
        .next()
        .ok_or_else(|| KeyError::Malformed("OpenSSH key has no key data".to_string()))?;
    let blob = STANDARD
        .decode(blob)
        .map_err(|e| KeyError::Malformed(format!("OpenSSH key data: {}", e)))?;

    let truncated = || KeyError::Malformed("OpenSSH key data is truncated".to_string());
    let mut rest = blob.as_slice();
    let name = read_field(&mut rest).ok_or_else(truncated)?;
    if name != SSH_RSA.as_bytes() {
        return Err(KeyError::Malformed(
            "OpenSSH key type does not match its key data".to_string(),
        ));
    }
    let e = read_field(&mut rest).ok_or_else(truncated)?;
    let n = read_field(&mut rest).ok_or_else(truncated)?;

    from_parts(n, e)
}

/// Read one length-prefixed field of the OpenSSH wire format.
fn read_field<'a>(buf: &mut &'a [u8]) -> Option<&'a [u8]> {
    let data: &'a [u8] = *buf;
    if data.len() < 4 {
        return None;
    }
    let (len, rest) = data.split_at(4);
    let len = u32::from_be_bytes([len[0], len[1], len[2], len[3]]) as usize;
    if rest.len() < len {
        return None;
    }
    let (field, rest) = rest.split_at(len);
    *buf = rest;
    Some(field)
}
