//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories stopped in the middle of an
//! operation, so the segment's operation context can be checked end to end.

#![allow(dead_code)]

use super::repository::*;
use git_segment::core::error::Result;

/// Scenario: `main` and `feature` both changed "initial.txt" differently
pub fn create_diverged_branches() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    git(&repo.path, &["checkout", "-b", "feature"])?;
    commit_file(&repo.path, "initial.txt", "feature content\n", "Feature change")?;

    git(&repo.path, &["checkout", "main"])?;
    commit_file(&repo.path, "initial.txt", "main content\n", "Main change")?;

    Ok(repo)
}

/// Scenario: merging `feature` into `main` stopped on a conflict
pub fn create_merge_conflict_repo() -> Result<TestRepo> {
    let repo = create_diverged_branches()?;
    git(&repo.path, &["merge", "feature"])?;
    Ok(repo)
}

/// Scenario: rebasing `feature` onto `main` stopped on a conflict at step 1 of 1
pub fn create_rebase_conflict_repo() -> Result<TestRepo> {
    let repo = create_diverged_branches()?;
    git(&repo.path, &["checkout", "feature"])?;
    git(&repo.path, &["rebase", "--merge", "main"])?;
    Ok(repo)
}

/// Scenario: HEAD detached at a commit tagged `v1.0`
pub fn create_detached_tag_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    git(&repo.path, &["tag", "v1.0"])?;
    git(&repo.path, &["checkout", "--detach"])?;
    Ok(repo)
}
