//! Environment evaluation of expanded arguments.
//!
//! [`Evaluator`] substitutes `$NAME` and `${NAME}` references. Unset variables
//! expand to the empty string. In relative mode, managed shortcuts (`$e1`,
//! `$e2`, ...) that resolve to an existing path are rewritten relative to the
//! working directory; any other reference keeps its substituted value.
//!
//! [`shell_escape`] prepares evaluated tokens for `eval` in the shell wrapper.

use log::debug;
use regex::Regex;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static MANAGED_SHORTCUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$e\d+$").expect("valid shortcut regex"));
static SHELL_SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\^()\[\]<>' ";|*]"#).expect("valid escape regex"));

pub struct Evaluator {
    relative: bool,
    cwd: Option<PathBuf>,
}

impl Evaluator {
    pub fn new(relative: bool) -> Self {
        Self {
            relative,
            cwd: env::current_dir().ok(),
        }
    }

    pub fn with_cwd(relative: bool, cwd: impl Into<PathBuf>) -> Self {
        Self {
            relative,
            cwd: Some(cwd.into()),
        }
    }

    pub fn evaluate(&self, token: &str) -> String {
        // Unset variables expand to nothing, like POSIX shells
        let expanded = shellexpand::env_with_context_no_errors(token, |name| {
            Some(env::var(name).unwrap_or_default())
        })
        .into_owned();

        if expanded != token && self.relative && MANAGED_SHORTCUT.is_match(token) {
            if let Some(relative) = self.relative_if_exists(&expanded) {
                debug!("Rewrote {token} as relative path {relative}");
                return relative;
            }
        }
        expanded
    }

    fn relative_if_exists(&self, value: &str) -> Option<String> {
        let path = Path::new(value);
        if !path.exists() {
            return None;
        }
        let cwd = self.cwd.as_deref()?;
        match pathdiff::diff_paths(path, cwd) {
            Some(rel) if rel.as_os_str().is_empty() => Some(".".to_string()),
            Some(rel) => Some(rel.to_string_lossy().into_owned()),
            None => None,
        }
    }
}

/// Backslash-escape shell metacharacters; an empty token becomes `''`.
pub fn shell_escape(token: &str) -> String {
    if token.is_empty() {
        return "''".to_string();
    }
    SHELL_SPECIAL.replace_all(token, r"\$0").into_owned()
}
