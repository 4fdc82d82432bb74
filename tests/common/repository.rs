//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with various states
//! and configurations for comprehensive testing scenarios.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use git_segment::core::error::{GitSegmentError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Home directory private to this repository's test
    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// Config file git-segment reads by default under [`TestRepo::home`]
    pub fn default_config_file(&self) -> PathBuf {
        self.home().join(".config").join("git-segment").join("config.json")
    }

    /// The git-segment binary started in the repository
    pub fn segment_cmd(&self) -> Command {
        self.segment_cmd_in(&self.path)
    }

    /// The git-segment binary started in `dir`, isolated from the user's setup
    pub fn segment_cmd_in(&self, dir: &Path) -> Command {
        segment_cmd(&self.home(), dir)
    }
}

/// Keeps the user's global and system git config out of `cmd`
pub fn isolate_git_config(cmd: &mut Command) -> &mut Command {
    cmd.env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_CONFIG_NOSYSTEM", "1")
}

/// Points `cmd` at `home` so no personal config file or git config is picked up
pub fn isolate<'a>(cmd: &'a mut Command, home: &Path) -> &'a mut Command {
    isolate_git_config(cmd)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
}

/// The git-segment binary started in `dir` with `home` as its home directory
pub fn segment_cmd(home: &Path, dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-segment").expect("git-segment binary should be built");
    isolate(&mut cmd, home).current_dir(dir);
    cmd
}

/// Runs git with `args` in `repo_path`, ignoring the exit status
///
/// Commands that are expected to fail (a conflicting merge, for instance) are
/// run through here too; tests assert on the resulting repository state.
pub fn git(repo_path: &Path, args: &[&str]) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.args(args).current_dir(repo_path).env("GIT_EDITOR", "true");
    let output = isolate_git_config(&mut cmd)
        .output()
        .map_err(GitSegmentError::Io)?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Sets git config needed to commit without prompts or signing
pub fn configure_identity(repo_path: &Path) -> Result<()> {
    git(repo_path, &["config", "user.name", "Test User"])?;
    git(repo_path, &["config", "user.email", "test@example.com"])?;
    git(repo_path, &["config", "commit.gpgsign", "false"])?;
    git(repo_path, &["config", "tag.gpgsign", "false"])?;
    Ok(())
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository on a
/// branch named `main` regardless of the installed git's default, and sets up
/// basic git configuration to avoid user prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(GitSegmentError::Io)?;
    let repo_path = temp_dir.path().join("repo");
    fs::create_dir(&repo_path).map_err(GitSegmentError::Io)?;

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    configure_identity(&repo_path)?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Clones `source` next to it and returns the clone's path
///
/// The clone tracks `origin/main`, giving tests a real upstream without any
/// network access.
pub fn clone_repo(source: &TestRepo, name: &str) -> Result<PathBuf> {
    let clone_path = source.temp_dir.path().join(name);
    let source_path = source.path.to_string_lossy().to_string();
    let clone_arg = clone_path.to_string_lossy().to_string();
    git(source.temp_dir.path(), &["clone", &source_path, &clone_arg])?;
    configure_identity(&clone_path)?;
    Ok(clone_path)
}

/// Creates a file with specified content in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content).map_err(GitSegmentError::Io)?;
    Ok(())
}

/// Adds a file to the git index ("." for all files)
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])?;
    Ok(())
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])?;
    Ok(())
}

/// Writes `content` to `filename` and commits it
pub fn commit_file(repo_path: &Path, filename: &str, content: &str, message: &str) -> Result<()> {
    create_file(repo_path, filename, content)?;
    git_add(repo_path, filename)?;
    git_commit(repo_path, message)
}
