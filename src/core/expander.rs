//! Expansion of numeric shortcuts into environment variable references.
//!
//! This module provides [`ArgExpander`] which rewrites a command line so that
//! file numbers printed by `scmpuff status` refer to the exported `eN`
//! variables. Evaluation of those references happens later, in
//! [`crate::core::environment`].
//!
//! # Public API
//! - [`ArgExpander`]: Expands an argv
//! - [`ShortcutRange`]: Inclusive numeric range such as `2-5`
//!
//! # Supported Formats
//! - **Single shortcut**: `3` becomes `$e3` (up to four digits, leading zeros kept)
//! - **Range**: `2-4` becomes `$e2 $e3 $e4`; a reversed range expands to nothing
//!   and a wide range stops after [`MAX_SHORTCUT_FILES`] shortcuts
//! - **Anything else**: passed through unchanged

use crate::core::flag_guard::FlagGuard;
use crate::core::render::MAX_SHORTCUT_FILES;
use log::debug;
use regex::Regex;
use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Environment variable naming the git executable used by the shell wrapper.
pub const GIT_CMD_ENV: &str = "SCMPUFF_GIT_CMD";

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{0,4}$").expect("valid digit regex"));
static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-([0-9]+)$").expect("valid range regex"));

#[derive(Debug, PartialEq)]
pub struct ShortcutRange {
    pub start: usize,
    pub end: usize,
}

impl ShortcutRange {
    /// Parse `lo-hi`; `None` when the token is not a range or a bound overflows.
    pub fn parse(token: &str) -> Option<Self> {
        let caps = RANGE.captures(token)?;
        let start = caps[1].parse().ok()?;
        let end = caps[2].parse().ok()?;
        Some(Self { start, end })
    }

    /// Number of shortcuts the range covers; zero when reversed.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).saturating_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// `$eN` references for the range, at most [`MAX_SHORTCUT_FILES`] of them.
    pub fn shortcuts(&self) -> impl Iterator<Item = String> {
        if self.len() > MAX_SHORTCUT_FILES {
            debug!(
                "Range {}-{} truncated to {MAX_SHORTCUT_FILES} shortcuts",
                self.start, self.end
            );
        }
        (self.start..=self.end)
            .take(MAX_SHORTCUT_FILES)
            .map(|n| format!("$e{n}"))
    }
}

pub struct ArgExpander {
    git_cmd: Option<String>,
    base_dir: PathBuf,
}

impl ArgExpander {
    pub fn new(git_cmd: Option<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            git_cmd,
            base_dir: base_dir.into(),
        }
    }

    /// Expander reading `SCMPUFF_GIT_CMD` and checking files in the working directory.
    pub fn from_env() -> Self {
        Self::new(env::var(GIT_CMD_ENV).ok(), PathBuf::from("."))
    }

    pub fn expand(&self, args: &[String]) -> Vec<String> {
        let mut expanded = Vec::with_capacity(args.len());
        for (pos, arg) in args.iter().enumerate() {
            if FlagGuard::protects(args, pos, self.git_cmd.as_deref()) {
                expanded.push(arg.clone());
            } else {
                expanded.extend(self.expand_arg(arg));
            }
        }
        debug!("Expanded {:?} to {:?}", args, expanded);
        expanded
    }

    fn expand_arg(&self, arg: &str) -> Vec<String> {
        if !arg.is_empty() && DIGITS.is_match(arg) {
            // A file literally named "3" wins over shortcut 3
            if self.base_dir.join(arg).exists() {
                return vec![arg.to_string()];
            }
            return vec![format!("$e{arg}")];
        }

        match ShortcutRange::parse(arg) {
            Some(range) => range.shortcuts().collect(),
            None => vec![arg.to_string()],
        }
    }
}
