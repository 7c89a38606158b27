//! Status model: branch header, status items and the parsed status snapshot.
//!
//! # Public API
//! - [`BranchInfo`]: Branch name plus ahead/behind counts from the header line
//! - [`StatusItem`]: One change type applied to one repo-relative path
//! - [`StatusInfo`]: Branch plus items in porcelain stream order
//!
//! # Path Discipline
//! Repo-relative paths are stored with forward slashes. Joining against a root
//! uses native semantics and is converted back to forward slashes on the way out.

use crate::core::git_status::ChangeType;
use path_slash::{PathBufExt as _, PathExt as _};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BranchInfo {
    pub name: String,
    pub commits_ahead: u32,
    pub commits_behind: u32,
}

impl BranchInfo {
    /// Upstream divergence such as `+2/-1`, or `None` when in sync.
    pub fn divergence(&self) -> Option<String> {
        match (self.commits_ahead, self.commits_behind) {
            (0, 0) => None,
            (a, 0) => Some(format!("+{a}")),
            (0, b) => Some(format!("-{b}")),
            (a, b) => Some(format!("+{a}/-{b}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusItem {
    pub change_type: ChangeType,
    pub path: String,
    /// Pre-rename path; empty unless the change is a rename or copy.
    pub orig_path: String,
}

impl StatusItem {
    pub fn new(change_type: ChangeType, path: impl Into<String>) -> Self {
        Self {
            change_type,
            path: path.into(),
            orig_path: String::new(),
        }
    }

    pub fn with_orig_path(mut self, orig_path: impl Into<String>) -> Self {
        self.orig_path = orig_path.into();
        self
    }

    /// Absolute path of the item under `root`, forward-slash delimited.
    pub fn abs_path(&self, root: &Path) -> String {
        join_slash(root, &self.path)
    }

    /// Path shown to the user, relative to `cwd`.
    ///
    /// Renames and copies show as `orig -> new`. Falls back to the absolute
    /// form when no relative path exists between `cwd` and the item.
    pub fn display_path(&self, root: &Path, cwd: &Path) -> String {
        let new = relative_slash(root, &self.path, cwd);
        if self.orig_path.is_empty() {
            new
        } else {
            let orig = relative_slash(root, &self.orig_path, cwd);
            format!("{orig} -> {new}")
        }
    }
}

fn native_join(root: &Path, repo_path: &str) -> PathBuf {
    root.join(PathBuf::from_slash(repo_path))
}

fn join_slash(root: &Path, repo_path: &str) -> String {
    native_join(root, repo_path)
        .as_path()
        .to_slash_lossy()
        .into_owned()
}

fn relative_slash(root: &Path, repo_path: &str, cwd: &Path) -> String {
    let abs = native_join(root, repo_path);
    match pathdiff::diff_paths(&abs, cwd) {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.as_path().to_slash_lossy().into_owned(),
        None => abs.as_path().to_slash_lossy().into_owned(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusInfo {
    pub branch: BranchInfo,
    pub items: Vec<StatusItem>,
}
