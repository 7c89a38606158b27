//! Core functionality for scmpuff.
//!
//! This module provides the status pipeline (git invocation, porcelain
//! parsing, rendering), argument expansion and evaluation, and the embedded
//! shell integration scripts.

pub mod colors;
pub mod environment;
pub mod error;
pub mod expander;
pub mod flag_guard;
pub mod git;
pub mod git_status;
pub mod output;
pub mod porcelain;
pub mod render;
pub mod shell_init;
pub mod state;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, ScmpuffError};

// === Git operations ===
// Spawned git commands for the project root and porcelain output
pub use git::GitCli;

// === Status model ===
// Change-type taxonomy and the parsed status snapshot
pub use git_status::{ChangeState, ChangeType, StatusGroup};
pub use state::{BranchInfo, StatusInfo, StatusItem};

// === Status pipeline ===
// Porcelain v1 parser and numbered display renderer
pub use porcelain::PorcelainParser;
pub use render::{RenderOptions, Renderer, MAX_SHORTCUT_FILES};

// === Argument expansion ===
// Numeric shortcuts to `$eN` references, then environment evaluation
pub use environment::{shell_escape, Evaluator};
pub use expander::{ArgExpander, ShortcutRange};
pub use flag_guard::FlagGuard;

// === Shell integration ===
pub use shell_init::{collection_for, ScriptCollection, BASH_COLLECTION, FISH_COLLECTION};

// === Output formatting ===
pub use output::{print_error, print_not_a_repository, print_parse_failure};
