//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`ScmpuffError`] which covers every failure mode of the
//! status pipeline, argument expansion and the command surface. It uses
//! `thiserror` for ergonomic error definitions and includes specialized
//! constructors for the common failure scenarios.
//!
//! # Public API
//! - [`ScmpuffError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, ScmpuffError>`
//!
//! # Error Categories
//! - **Git process**: not a repository, spawn failures, non-zero exits
//! - **Porcelain parsing**: branch header, XY codes, record framing
//! - **Command surface**: unknown shells, exec failures
//!
//! Mapping errors to exit codes happens only in `main.rs`.

use thiserror::Error;

/// Domain-specific error types for scmpuff
#[derive(Error, Debug)]
pub enum ScmpuffError {
    // Git process errors
    #[error("Not a git repository (or any of the parent directories)")]
    NotInGitRepo,

    #[error("failed to run `{command}`: {source}")]
    GitSpawnFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` exited with status {code}: {stderr}")]
    GitCommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    // Porcelain parse errors
    #[error("failed to parse branch header: missing from status output")]
    MissingBranchHeader,

    #[error("failed to parse branch name for output: [{header}]")]
    InvalidBranchHeader { header: String },

    #[error("unknown git status XY code: [{code}] (bytes {bytes:?})")]
    UnknownChangeCode { code: String, bytes: [u8; 2] },

    #[error("truncated status record: {record:?}")]
    TruncatedRecord { record: String },

    #[error("rename/copy record for '{path}' is missing its original path")]
    MissingOrigPath { path: String },

    // Command surface errors
    #[error("Unrecognized shell '{shell}'")]
    UnrecognizedShell { shell: String },

    #[error("no command given to execute")]
    EmptyCommand,

    #[error("failed to execute '{program}': {source}")]
    ExecFailed {
        program: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using ScmpuffError
pub type Result<T> = std::result::Result<T, ScmpuffError>;

impl ScmpuffError {
    /// Create a git spawn failure error
    pub fn git_spawn_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::GitSpawnFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a git non-zero exit error
    pub fn git_command_failed(
        command: impl Into<String>,
        code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Create an invalid branch header error
    pub fn invalid_branch_header(header: impl Into<String>) -> Self {
        Self::InvalidBranchHeader {
            header: header.into(),
        }
    }

    /// Create an unknown change code error from the raw XY bytes
    pub fn unknown_change_code(x: u8, y: u8) -> Self {
        Self::UnknownChangeCode {
            code: String::from_utf8_lossy(&[x, y]).into_owned(),
            bytes: [x, y],
        }
    }

    /// Create a truncated record error
    pub fn truncated_record(record: &[u8]) -> Self {
        Self::TruncatedRecord {
            record: String::from_utf8_lossy(record).into_owned(),
        }
    }

    /// Create a missing original path error
    pub fn missing_orig_path(path: impl Into<String>) -> Self {
        Self::MissingOrigPath { path: path.into() }
    }

    /// Create an unrecognized shell error
    pub fn unrecognized_shell(shell: impl Into<String>) -> Self {
        Self::UnrecognizedShell {
            shell: shell.into(),
        }
    }

    /// Create an exec spawn failure error
    pub fn exec_failed(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::ExecFailed {
            program: program.into(),
            source,
        }
    }

    /// Whether this error came from decoding porcelain output.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MissingBranchHeader
                | Self::InvalidBranchHeader { .. }
                | Self::UnknownChangeCode { .. }
                | Self::TruncatedRecord { .. }
                | Self::MissingOrigPath { .. }
        )
    }
}
