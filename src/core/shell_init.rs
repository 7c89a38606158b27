//! Embedded shell integration scripts.
//!
//! Each supported shell family has a [`ScriptCollection`] of three fragments:
//! the `scmpuff_status` shortcut function, an optional `git` wrapper that
//! routes file-taking subcommands through `scmpuff exec`, and optional short
//! aliases. The fragments are compiled into the binary.

use crate::core::error::{Result, ScmpuffError};
use std::env;
use std::path::Path;

pub struct ScriptCollection {
    pub status_shortcuts: &'static str,
    pub git_wrapper: &'static str,
    pub aliases: &'static str,
}

impl ScriptCollection {
    /// Concatenate the selected fragments, separated by blank lines.
    pub fn output(&self, wrap_git: bool, include_aliases: bool) -> String {
        let mut script = String::from(self.status_shortcuts);
        if wrap_git {
            script.push('\n');
            script.push_str(self.git_wrapper);
        }
        if include_aliases {
            script.push('\n');
            script.push_str(self.aliases);
        }
        script
    }
}

pub static BASH_COLLECTION: ScriptCollection = ScriptCollection {
    status_shortcuts: include_str!("../../assets/shell/status_shortcuts.sh"),
    git_wrapper: include_str!("../../assets/shell/git_wrapper.sh"),
    aliases: include_str!("../../assets/shell/aliases.sh"),
};

pub static FISH_COLLECTION: ScriptCollection = ScriptCollection {
    status_shortcuts: include_str!("../../assets/shell/status_shortcuts.fish"),
    git_wrapper: include_str!("../../assets/shell/git_wrapper.fish"),
    aliases: include_str!("../../assets/shell/aliases.fish"),
};

/// Script collection for a shell name, case-insensitively.
pub fn collection_for(shell: &str) -> Result<&'static ScriptCollection> {
    match shell.to_lowercase().as_str() {
        "sh" | "bash" | "zsh" => Ok(&BASH_COLLECTION),
        "fish" => Ok(&FISH_COLLECTION),
        _ => Err(ScmpuffError::unrecognized_shell(shell)),
    }
}

/// Shell assumed when `--shell` is given without a value.
pub fn default_shell_type() -> String {
    shell_type_from(env::var("SHELL").ok().as_deref())
}

fn shell_type_from(shell_env: Option<&str>) -> String {
    let base = shell_env
        .map(Path::new)
        .and_then(Path::file_name)
        .and_then(|name| name.to_str());
    match base {
        Some(name @ ("sh" | "bash" | "zsh" | "fish")) => name.to_string(),
        _ => "sh".to_string(),
    }
}
