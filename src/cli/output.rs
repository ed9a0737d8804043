//! Shared CLI output helpers.
//!
//! Diagnostics go to stderr so stdout carries nothing but ciphertext.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints
//! - Bold: headers, values
//! - Dimmed: labels

use std::fmt::Display;

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ cannot read key file etc/travis.key.txt: No such file or directory`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ pass --key <PATH> or set TRAVIS_ENCRYPT_KEY`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  modulus      2048 bits`
pub fn kv(label: &str, value: impl Display) {
    let label = format!("{:<12}", label);
    if colors_enabled() {
        println!("  {} {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {} {}", label, value);
    }
}
