//! Output helpers for the command-line surface.
//!
//! The segment itself goes to stdout untouched so a prompt can embed it.
//! Everything else a user might read, errors in particular, goes to stderr.

use colored::*;

/// Print an error message to stderr
///
/// # Format
/// ```text
/// ✕ Error: <message>
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✕ Error:".red(), message.white());
}

/// Format one line of the `options` listing: `key = value`
pub fn format_option_line(key: &str, value: &str) -> String {
    format!("{key} = {value}")
}
