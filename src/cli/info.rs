//! Key information command.

use std::path::Path;

use serde::Serialize;

use crate::cli::output;
use crate::core::cipher::Padding;
use crate::core::key::{KeyFormat, PublicKey};
use crate::error::Result;

/// Plaintext capacity under one padding scheme.
#[derive(Serialize)]
struct Capacity {
    padding: Padding,
    bytes: usize,
}

/// Machine-readable key summary.
#[derive(Serialize)]
struct KeyInfo {
    path: String,
    format: KeyFormat,
    bits: usize,
    exponent: String,
    fingerprint: String,
    capacity: Vec<Capacity>,
}

impl KeyInfo {
    fn new(path: &Path, key: &PublicKey) -> Result<Self> {
        Ok(Self {
            path: path.display().to_string(),
            format: key.format(),
            bits: key.bits(),
            exponent: key.exponent(),
            fingerprint: key.fingerprint()?,
            capacity: Padding::ALL
                .iter()
                .map(|&padding| Capacity {
                    padding,
                    bytes: padding.capacity(key),
                })
                .collect(),
        })
    }
}

/// Show what the key at `key_path` is and how much it can encrypt.
pub fn execute(key_path: &Path, json: bool) -> Result<()> {
    let key = PublicKey::load(key_path)?;
    let info = KeyInfo::new(key_path, &key)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    output::header("Public key");
    output::kv("path", &info.path);
    output::kv("format", info.format);
    output::kv("modulus", format!("{} bits", info.bits));
    output::kv("exponent", &info.exponent);
    output::kv("fingerprint", &info.fingerprint);
    for capacity in &info.capacity {
        output::kv(
            capacity.padding.name(),
            format!("up to {} bytes of plaintext", capacity.bytes),
        );
    }
    Ok(())
}
