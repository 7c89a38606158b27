//! Common assertion helpers for test output validation
//!
//! Provides predicates and assertion utilities for validating scmpuff
//! command output, error messages, and expected behaviors.

#![allow(dead_code)]

use predicates::prelude::*;

/// Strips ANSI SGR sequences so display output can be matched as plain text
pub fn strip_ansi(text: &str) -> String {
    let re = regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    re.replace_all(text, "").into_owned()
}

/// Creates a predicate that checks for the red not-a-repository message
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains(
        "\x1b[0;31mNot a git repository (or any of the parent directories)\x1b[0m",
    )
}

/// Creates a predicate that checks for the branch banner
pub fn has_branch_info(branch: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("On branch: \x1b[1m{branch}"))
}

/// Creates a predicate that checks for a numbered file index
pub fn has_file_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[\x1b[0m{index}\x1b[2;37m]"))
}

/// Creates a predicate that checks for a group header
pub fn has_group(description: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("➤\x1b[0m {description}"))
}
