//! travis-encrypt - Encrypt a CI secret with the repository's public key.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use travis_encrypt::cli::output;
use travis_encrypt::cli::{execute, Cli};
use travis_encrypt::core::constants::{KEY_ENV, LOG_ENV};
use travis_encrypt::error::{CipherError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("travis_encrypt=debug")
        } else {
            EnvFilter::new("travis_encrypt=warn")
        }
    });

    // Logs share stderr with diagnostics; stdout is reserved for ciphertext.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::FileAccess { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Some(format!(
                    "download the repository key or pass --key <PATH> (or set {})",
                    KEY_ENV
                ))
            }
            Error::Cipher(CipherError::PlaintextTooLong { .. }) => Some(
                "RSA can only encrypt short values; encrypt a symmetric key instead of the data itself"
                    .to_string(),
            ),
            _ => None,
        };

        output::error(&format!("{}: {}", e.category(), e));
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
