//! `completions` subcommand: print a completion script for the binary.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

use crate::cli::{Cli, Shell};
use crate::error::{Error, Result};

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
        }
    }
}

/// Write the completion script for `shell` to stdout.
///
/// The script is rendered in memory first so a closed stdout surfaces as
/// an error instead of a panic inside the generator.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    let mut script = Vec::new();
    generate(CompletionShell::from(shell), &mut cmd, name, &mut script);

    let mut stdout = io::stdout().lock();
    stdout.write_all(&script).map_err(Error::Stdout)?;
    stdout.flush().map_err(Error::Stdout)?;
    Ok(())
}
