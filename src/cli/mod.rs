//! Command-line interface.

pub mod completions;
pub mod encrypt;
pub mod info;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::cipher::Padding;
use crate::core::constants::{DEFAULT_KEY_PATH, KEY_ENV};

/// travis-encrypt - Encrypt a CI secret with the repository's public key.
#[derive(Parser)]
#[command(
    name = "travis-encrypt",
    about = "Encrypt stdin with the repository's RSA public key and print it as base64",
    version,
    after_help = "Example: echo -n 'API_TOKEN=s3cret' | travis-encrypt"
)]
pub struct Cli {
    /// Path to the RSA public key
    #[arg(short, long, env = KEY_ENV, default_value = DEFAULT_KEY_PATH, global = true)]
    pub key: PathBuf,

    /// Padding scheme used for encryption
    #[arg(short, long, value_enum, default_value_t = Padding::default())]
    pub padding: Padding,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands. Without one, stdin is encrypted.
#[derive(Subcommand)]
pub enum Command {
    /// Show the key's format, size, fingerprint and plaintext capacity
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    match cli.command {
        None => encrypt::execute(&cli.key, cli.padding),
        Some(Command::Info { json }) => info::execute(&cli.key, json),
        Some(Command::Completions { shell }) => completions::execute(shell),
    }
}
