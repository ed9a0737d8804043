//! Default command: encrypt stdin and print base64 to stdout.

use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher::Padding;
use crate::core::key::PublicKey;
use crate::core::secret;
use crate::error::{Error, Result};

/// Encrypt all of stdin under the key at `key_path`.
///
/// The key is loaded and parsed before stdin is read, and stdout is only
/// written once encryption has succeeded.
pub fn execute(key_path: &Path, padding: Padding) -> Result<()> {
    let key = PublicKey::load(key_path)?;

    let mut plaintext = Zeroizing::new(Vec::new());
    io::stdin()
        .lock()
        .read_to_end(&mut plaintext)
        .map_err(Error::Stdin)?;
    debug!(plaintext_len = plaintext.len(), "read stdin");

    let encoded = secret::encrypt_for(&key, &plaintext, padding)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", encoded).map_err(Error::Stdout)?;
    stdout.flush().map_err(Error::Stdout)?;
    Ok(())
}
