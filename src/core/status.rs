//! Parsing of `git status --porcelain -b` output.
//!
//! The first line is the branch header (`## main...origin/main [ahead 1]`),
//! every following line is a two-column status entry. The header is matched
//! against a fixed pattern; anything it does not capture is left empty, which
//! is the normal case for a repository without commits or a detached HEAD.
//!
//! # Public API
//! - [`StatusModel`]: Per-area tallies of changed files
//! - [`BranchTracking`]: Raw fields captured from the header line
//! - [`ParsedStatus`]: Both areas plus the tracking fields
//! - [`parse_status`]: Entry point for the full command output

use crate::core::change::{Area, ChangeKind};
use regex::Regex;
use std::sync::LazyLock;

static BRANCH_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^## (?P<local>\S+?)(\.{3}(?P<upstream>\S+?)( \[(ahead (?P<ahead>\d+)(, )?)?(behind (?P<behind>\d+))?\])?)?$",
    )
    .expect("branch header pattern is valid")
});

/// Counts of changed files in one area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusModel {
    pub added: usize,
    pub modified: usize,
    pub deleted: usize,
    pub untracked: usize,
    pub unmerged: usize,
}

impl StatusModel {
    /// Tally every entry line for `area`
    pub fn from_entries<'a, I>(entries: I, area: Area) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut model = StatusModel::default();
        for line in entries {
            if let Some(kind) = area.classify(line) {
                model.record(kind);
            }
        }
        model
    }

    pub fn record(&mut self, kind: ChangeKind) {
        *self.count_mut(kind) += 1;
    }

    pub fn count(&self, kind: ChangeKind) -> usize {
        match kind {
            ChangeKind::Added => self.added,
            ChangeKind::Modified => self.modified,
            ChangeKind::Deleted => self.deleted,
            ChangeKind::Untracked => self.untracked,
            ChangeKind::Unmerged => self.unmerged,
        }
    }

    fn count_mut(&mut self, kind: ChangeKind) -> &mut usize {
        match kind {
            ChangeKind::Added => &mut self.added,
            ChangeKind::Modified => &mut self.modified,
            ChangeKind::Deleted => &mut self.deleted,
            ChangeKind::Untracked => &mut self.untracked,
            ChangeKind::Unmerged => &mut self.unmerged,
        }
    }

    pub fn is_empty(&self) -> bool {
        ChangeKind::ALL.iter().all(|kind| self.count(*kind) == 0)
    }
}

/// Fields captured from the branch header, as raw text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchTracking {
    pub local: String,
    pub upstream: String,
    pub ahead: String,
    pub behind: String,
}

impl BranchTracking {
    /// Match the header line. A line that does not match yields all-empty fields.
    pub fn parse(header: &str) -> Self {
        let Some(captures) = BRANCH_HEADER.captures(header) else {
            log::debug!("Branch header not recognized: {header:?}");
            return Self::default();
        };

        let group = |name: &str| {
            captures
                .name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        Self {
            local: group("local"),
            upstream: group("upstream"),
            ahead: group("ahead"),
            behind: group("behind"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStatus {
    pub tracking: BranchTracking,
    pub staging: StatusModel,
    pub working: StatusModel,
}

/// Parse the complete output of `git status --porcelain -b --ignore-submodules`
pub fn parse_status(output: &str) -> ParsedStatus {
    let mut lines = output.split('\n');
    let header = lines.next().unwrap_or_default();
    let entries: Vec<&str> = lines.collect();

    ParsedStatus {
        tracking: BranchTracking::parse(header),
        staging: StatusModel::from_entries(entries.iter().copied(), Area::Staging),
        working: StatusModel::from_entries(entries.iter().copied(), Area::Working),
    }
}
