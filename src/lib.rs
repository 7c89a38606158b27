//! scmpuff - numeric file shortcuts for common git commands.
//!
//! `scmpuff status` numbers every changed file and prints a TAB-separated
//! filelist that the shell integration exports as `e1`, `e2`, ...; `scmpuff
//! exec` and `scmpuff expand` turn those numbers back into paths.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Porcelain v1 parsing and the status model
//! - Rendering of the numbered status display and filelist
//! - Argument expansion and environment evaluation
//! - Error handling and result types
//! - Embedded shell integration scripts

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Argument expansion
    ArgExpander,
    BranchInfo,
    // Status model
    ChangeState,
    ChangeType,
    Evaluator,
    // Git operations
    GitCli,
    // Status pipeline
    PorcelainParser,
    RenderOptions,
    Renderer,
    Result,
    // Error handling
    ScmpuffError,
    StatusGroup,
    StatusInfo,
    StatusItem,
};
