//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories with specific file states
//! and configurations to test various git scenarios consistently.

#![allow(dead_code)]

use super::repository::*;
use scmpuff::core::error::Result;

/// Scenario: one file in each display group
///
/// - `staged.txt`: new file in the index
/// - `initial.txt`: modified in the worktree
/// - `untracked.txt`: untracked
pub fn create_mixed_status_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    create_file(&repo.path, "staged.txt", "staged\n")?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "initial.txt", "changed\n")?;
    create_file(&repo.path, "untracked.txt", "untracked\n")?;

    Ok(repo)
}

/// Scenario: Repository with multiple files for range testing
/// Creates a repository with 5 changed files
pub fn create_multi_file_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_test_files(&repo.path, &["file1.txt", "file2.txt", "file3.txt"])?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    modify_test_files(&repo.path, &["file1.txt", "file2.txt", "file3.txt"])?;
    create_test_files(&repo.path, &["file4.txt", "file5.txt"])?;

    Ok(repo)
}

/// Scenario: a staged rename of `old.txt` to `new.txt`
pub fn create_renamed_file_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "old.txt", "same content for rename detection\n")?;
    git_add(&repo.path, "old.txt")?;
    git_commit(&repo.path, "Add old")?;
    git(&repo.path, &["mv", "old.txt", "new.txt"])?;

    Ok(repo)
}
