//! Capabilities the segment needs from its surroundings.
//!
//! [`Environment`] is the seam between the parsing/formatting logic and the
//! outside world: running a program and probing files inside the repository
//! metadata directory. [`SystemEnvironment`] is the real implementation; unit
//! tests substitute canned fixtures.
//!
//! None of the methods fail. A program that cannot be spawned or exits non-zero
//! yields an empty string, and a missing file reads as empty.

use crate::core::runner::GitRunner;
use std::path::{Path, PathBuf};
use std::process::Command;

pub trait Environment {
    /// Whether `name` resolves to an executable on the search path
    fn has_command(&self, name: &str) -> bool;

    /// Run `program` with `args` and return its trimmed stdout, or "" on failure
    fn run_command(&self, program: &str, args: &[&str]) -> String;

    /// Whether `path`, relative to the metadata directory, is a directory
    fn has_folder(&self, path: &str) -> bool;

    /// Whether `path`, relative to the metadata directory, is a file
    fn has_file(&self, path: &str) -> bool;

    /// Contents of `path`, relative to the metadata directory, or "" when unreadable
    fn file_content(&self, path: &str) -> String;
}

/// Environment backed by real processes and the local filesystem
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    work_dir: PathBuf,
    git_dir: PathBuf,
}

impl SystemEnvironment {
    /// Create an environment rooted at `work_dir`, locating its metadata directory
    ///
    /// The metadata directory is asked of git itself so that subdirectories and
    /// linked worktrees resolve correctly. When git has no answer, `<work_dir>/.git`
    /// is assumed.
    pub fn discover<P: AsRef<Path>>(work_dir: P) -> Self {
        let work_dir = work_dir.as_ref().to_path_buf();
        let mut env = Self {
            git_dir: work_dir.join(".git"),
            work_dir,
        };

        let reported = locate_git_dir(&GitRunner::new(&env), &env.work_dir);
        if let Some(git_dir) = reported {
            env.git_dir = git_dir;
        }
        log::debug!("Metadata directory: {}", env.git_dir.display());
        env
    }

    /// Create an environment with an explicitly known metadata directory
    pub fn with_git_dir<P: AsRef<Path>, Q: AsRef<Path>>(work_dir: P, git_dir: Q) -> Self {
        Self {
            work_dir: work_dir.as_ref().to_path_buf(),
            git_dir: git_dir.as_ref().to_path_buf(),
        }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }
}

/// Metadata directory as reported by git for `work_dir`, if any
fn locate_git_dir(runner: &GitRunner<'_>, work_dir: &Path) -> Option<PathBuf> {
    let reported = runner.run(&["rev-parse", "--git-dir"]);
    if reported.is_empty() {
        return None;
    }
    // git prints a path relative to the working directory unless it is elsewhere
    Some(work_dir.join(reported))
}

impl Environment for SystemEnvironment {
    fn has_command(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }

    fn run_command(&self, program: &str, args: &[&str]) -> String {
        let output = match Command::new(program)
            .args(args)
            .current_dir(&self.work_dir)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                log::debug!("Failed to spawn {program}: {e}");
                return String::new();
            }
        };

        if !output.status.success() {
            log::debug!(
                "{program} {} exited with {}: {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return String::new();
        }

        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    fn has_folder(&self, path: &str) -> bool {
        self.git_dir.join(path).is_dir()
    }

    fn has_file(&self, path: &str) -> bool {
        self.git_dir.join(path).is_file()
    }

    fn file_content(&self, path: &str) -> String {
        let full_path = self.git_dir.join(path);
        match std::fs::read_to_string(&full_path) {
            Ok(content) => content,
            Err(e) => {
                log::trace!("Cannot read {}: {e}", full_path.display());
                String::new()
            }
        }
    }
}
