//! In-memory [`Environment`] for unit tests.

use crate::core::env::Environment;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct MockEnvironment {
    pub commands: HashSet<String>,
    /// Canned stdout keyed by the full argument line, program included
    pub outputs: HashMap<String, String>,
    pub folders: HashSet<String>,
    pub files: HashMap<String, String>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment where git is installed and the directory is a work tree
    pub fn inside_work_tree() -> Self {
        Self::new()
            .with_command("git")
            .with_git_output("rev-parse --is-inside-work-tree", "true")
    }

    pub fn with_command(mut self, name: &str) -> Self {
        self.commands.insert(name.to_string());
        self
    }

    /// Register output for `git -c core.quotepath=false -c color.status=false <args>`
    pub fn with_git_output(mut self, args: &str, output: &str) -> Self {
        self.outputs.insert(
            format!("git -c core.quotepath=false -c color.status=false {args}"),
            output.to_string(),
        );
        self
    }

    pub fn with_folder(mut self, path: &str) -> Self {
        self.folders.insert(path.to_string());
        self
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }
}

impl Environment for MockEnvironment {
    fn has_command(&self, name: &str) -> bool {
        self.commands.contains(name)
    }

    fn run_command(&self, program: &str, args: &[&str]) -> String {
        let line = format!("{program} {}", args.join(" "));
        self.outputs.get(&line).cloned().unwrap_or_default()
    }

    fn has_folder(&self, path: &str) -> bool {
        self.folders.contains(path)
    }

    fn has_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn file_content(&self, path: &str) -> String {
        self.files.get(path).cloned().unwrap_or_default()
    }
}
