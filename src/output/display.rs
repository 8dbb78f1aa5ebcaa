//! Display functions for the binary's own messages
//!
//! Protocol lines stay plain; only the stderr error prefix is colored.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

/// Print a prompt without a trailing newline
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed.
pub fn print_prompt(out: &mut impl Write, prompt: &str) -> io::Result<()> {
    write!(out, "{prompt}")?;
    out.flush()
}

/// Echo the word file path back to the player
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_file_echo(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "File is: {}", path.display())
}

/// Print an error with a red `error:` prefix to stderr
pub fn print_error(err: &(impl Display + ?Sized)) {
    eprintln!("{}: {err}", "error".red().bold());
}
