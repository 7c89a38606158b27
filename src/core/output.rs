//! Error output helpers.
//!
//! All diagnostics go to stderr: stdout of `status` and `expand` is read by
//! the shell integration and must only carry command output.

use crate::core::colors::{RED, RESET};
use colored::*;

/// Issue tracker shown when the porcelain output cannot be understood.
pub const ISSUES_URL: &str = "https://github.com/mroth/scmpuff/issues/";

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
/// ✕ Error: <message>
/// ```
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✕ Error:".red(), message);
}

/// Prints the red "not a git repository" line expected by the shell wrapper.
pub fn print_not_a_repository() {
    eprintln!("{RED}Not a git repository (or any of the parent directories){RESET}");
}

/// Prints a parse failure followed by instructions for filing a bug.
pub fn print_parse_failure(message: &str) {
    print_error(message);
    eprintln!();
    eprintln!("{}", bug_report_footer());
}

pub fn bug_report_footer() -> String {
    format!(
        "Please file a bug including this error message as well as the output from:\n\n\
         scmpuff debug dump --archive\n\n\
         You can file the bug at: {ISSUES_URL}"
    )
}
