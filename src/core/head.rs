//! Detection of in-progress operations and the "what is checked out" text.
//!
//! Git leaves marker files in its metadata directory while a rebase, merge or
//! cherry-pick is stopped. [`HeadOperation::detect`] walks an ordered list of
//! probes, first match wins, and [`resolve_head`] wraps the plain ref in the
//! operation's context.
//!
//! The plain ref is the local branch when the status header named one, else the
//! tag pointing exactly at HEAD, else the short commit hash.

use crate::core::config::{Properties, SegmentOption};
use crate::core::runner::GitRunner;

/// Operation git is in the middle of, with only the data each one displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadOperation {
    Clean,
    /// Interactive or merge-based rebase (`rebase-merge/`)
    Rebasing {
        origin: String,
        onto: String,
        step: String,
        total: String,
    },
    /// Patch-based rebase or `git am` (`rebase-apply/`)
    ///
    /// Shares `rebase_icon` and its `REBASE:` default with [`HeadOperation::Rebasing`].
    Applying {
        origin: String,
        step: String,
        total: String,
    },
    Merging {
        merge_head: String,
    },
    CherryPicking {
        sha: String,
    },
}

type Probe = fn(&GitRunner<'_>) -> Option<HeadOperation>;

/// Probes in precedence order
const PROBES: [Probe; 4] = [probe_rebase_merge, probe_rebase_apply, probe_merge, probe_cherry_pick];

impl HeadOperation {
    pub fn detect(runner: &GitRunner<'_>) -> Self {
        let operation = PROBES
            .iter()
            .find_map(|probe| probe(runner))
            .unwrap_or(HeadOperation::Clean);
        log::debug!("Detected head operation: {operation:?}");
        operation
    }

    /// Wrap `head_ref` (already carrying its icon) in this operation's context
    pub fn describe(&self, head_ref: &str, props: &Properties) -> String {
        let branch_icon = props.get_string(SegmentOption::BranchIcon);
        match self {
            HeadOperation::Clean => head_ref.to_string(),
            HeadOperation::Rebasing {
                origin,
                onto,
                step,
                total,
            } => format!(
                "{}{branch_icon}{origin} onto {branch_icon}{onto} ({step}/{total}) at {head_ref}",
                props.get_string(SegmentOption::RebaseIcon)
            ),
            HeadOperation::Applying {
                origin,
                step,
                total,
            } => format!(
                "{}{branch_icon}{origin} ({step}/{total}) at {head_ref}",
                props.get_string(SegmentOption::RebaseIcon)
            ),
            HeadOperation::Merging { merge_head } => format!(
                "{}{branch_icon}{merge_head} into {head_ref}",
                props.get_string(SegmentOption::MergeIcon)
            ),
            HeadOperation::CherryPicking { sha } => format!(
                "{}{sha} onto {head_ref}",
                props.get_string(SegmentOption::CherryPickIcon)
            ),
        }
    }
}

/// Build the head description for a render. `local_branch` is empty when the
/// status header named no branch.
pub fn resolve_head(runner: &GitRunner<'_>, props: &Properties, local_branch: &str) -> String {
    let head_ref = if local_branch.is_empty() {
        pretty_head_name(runner, props)
    } else {
        format!("{}{local_branch}", props.get_string(SegmentOption::BranchIcon))
    };

    HeadOperation::detect(runner).describe(&head_ref, props)
}

/// Tag at HEAD, falling back to the short commit hash
fn pretty_head_name(runner: &GitRunner<'_>, props: &Properties) -> String {
    let tag = runner.run(&["describe", "--tags", "--exact-match"]);
    if !tag.is_empty() {
        return format!("{}{tag}", props.get_string(SegmentOption::TagIcon));
    }

    let commit = runner.run(&["rev-parse", "--short", "HEAD"]);
    format!("{}{commit}", props.get_string(SegmentOption::CommitIcon))
}

fn probe_rebase_merge(runner: &GitRunner<'_>) -> Option<HeadOperation> {
    if !runner.env().has_folder("rebase-merge") {
        return None;
    }
    Some(HeadOperation::Rebasing {
        origin: symbolic_name(runner, "rebase-merge/orig-head"),
        onto: symbolic_name(runner, "rebase-merge/onto"),
        step: metadata_file(runner, "rebase-merge/msgnum"),
        total: metadata_file(runner, "rebase-merge/end"),
    })
}

fn probe_rebase_apply(runner: &GitRunner<'_>) -> Option<HeadOperation> {
    if !runner.env().has_folder("rebase-apply") {
        return None;
    }
    let head_name = metadata_file(runner, "rebase-apply/head-name");
    Some(HeadOperation::Applying {
        origin: head_name.replacen("refs/heads/", "", 1),
        step: metadata_file(runner, "rebase-apply/next"),
        total: metadata_file(runner, "rebase-apply/last"),
    })
}

fn probe_merge(runner: &GitRunner<'_>) -> Option<HeadOperation> {
    if !runner.env().has_file("MERGE_HEAD") {
        return None;
    }
    Some(HeadOperation::Merging {
        merge_head: symbolic_name(runner, "MERGE_HEAD"),
    })
}

fn probe_cherry_pick(runner: &GitRunner<'_>) -> Option<HeadOperation> {
    if !runner.env().has_file("CHERRY_PICK_HEAD") {
        return None;
    }
    Some(HeadOperation::CherryPicking {
        sha: symbolic_name(runner, "CHERRY_PICK_HEAD"),
    })
}

/// Trimmed contents of a file in the metadata directory
fn metadata_file(runner: &GitRunner<'_>, path: &str) -> String {
    runner
        .env()
        .file_content(path)
        .trim_matches(|c| c == ' ' || c == '\r' || c == '\n')
        .to_string()
}

/// Name of the nearest non-tag ref for the commit id stored in `path`
fn symbolic_name(runner: &GitRunner<'_>, path: &str) -> String {
    let id = metadata_file(runner, path);
    if id.is_empty() {
        log::debug!("No commit id recorded in {path}");
        return String::new();
    }
    runner.run(&["name-rev", "--name-only", "--exclude=tags/*", &id])
}
