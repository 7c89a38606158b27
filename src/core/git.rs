//! Git process invocation.
//!
//! This module provides [`GitCli`], a thin wrapper that spawns the git
//! executable, captures its stdout and maps failures to [`ScmpuffError`].
//!
//! # Public API
//! - [`GitCli`]: Runs git in a working directory
//!
//! # Key Features
//! - **Executable selection**: `SCMPUFF_GIT_CMD` when set, otherwise `git`
//! - **Repository detection**: exit status 128 maps to [`ScmpuffError::NotInGitRepo`]
//! - **Project root**: `rev-parse --show-cdup` joined to the working directory

use crate::core::error::{Result, ScmpuffError};
use crate::core::expander::GIT_CMD_ENV;
use log::debug;
use normalize_path::NormalizePath;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Exit status git uses when run outside a repository.
const NOT_A_REPOSITORY: i32 = 128;

pub struct GitCli {
    program: String,
    cwd: PathBuf,
}

impl GitCli {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: cwd.into(),
        }
    }

    /// Git from `SCMPUFF_GIT_CMD` (or `git`) in the current directory.
    pub fn from_env() -> Result<Self> {
        let program = env::var(GIT_CMD_ENV)
            .ok()
            .filter(|cmd| !cmd.is_empty())
            .unwrap_or_else(|| "git".to_string());
        Ok(Self::new(program, env::current_dir()?))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Absolute, lexically cleaned path of the repository's top level.
    pub fn project_root(&self) -> Result<PathBuf> {
        let output = self.run(&["rev-parse", "--show-cdup"])?;
        let cdup = String::from_utf8_lossy(&output);
        let root = self.cwd.join(cdup.trim()).normalize();
        debug!("Project root: {}", root.display());
        Ok(root)
    }

    /// Raw `git status -z -b` output.
    pub fn status_output(&self) -> Result<Vec<u8>> {
        let output = self.run(&["status", "-z", "-b"])?;
        debug!("Read {} bytes of porcelain output", output.len());
        Ok(output)
    }

    fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        let command_line = format!("{} {}", self.program, args.join(" "));
        debug!("Running `{command_line}` in {}", self.cwd.display());

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.cwd)
            .output()
            .map_err(|e| ScmpuffError::git_spawn_failed(&command_line, e))?;

        if output.status.success() {
            return Ok(output.stdout);
        }

        match output.status.code() {
            Some(NOT_A_REPOSITORY) => Err(ScmpuffError::NotInGitRepo),
            code => Err(ScmpuffError::git_command_failed(
                command_line,
                code.unwrap_or(-1),
                String::from_utf8_lossy(&output.stderr).trim(),
            )),
        }
    }
}
