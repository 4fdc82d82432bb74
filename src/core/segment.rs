//! Entry point used by a prompt to obtain the git segment.
//!
//! [`GitSegment`] ties the pieces together for one render: it asks git for the
//! porcelain status, parses it, resolves the head description, and hands the
//! resulting [`RepoSnapshot`] to the formatter. Nothing is cached; every call
//! starts from scratch and only reads from the repository.

use crate::core::config::{Properties, SegmentOption};
use crate::core::env::Environment;
use crate::core::format::format_segment;
use crate::core::head::resolve_head;
use crate::core::runner::{GitRunner, GIT_PROGRAM};
use crate::core::status::{parse_status, StatusModel};
use crate::core::upstream::remote_name;

/// Everything one render knows about the repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoSnapshot {
    pub working: StatusModel,
    pub staging: StatusModel,
    pub ahead: usize,
    pub behind: usize,
    /// Branch, tag, commit or operation context; never empty
    pub head: String,
    /// `remote/branch`, or empty without an upstream
    pub upstream: String,
    /// URL of the upstream's remote, only looked up when the host icon is shown
    pub upstream_url: String,
    pub stash_count: String,
}

pub struct GitSegment<'a> {
    env: &'a dyn Environment,
    props: &'a Properties,
}

impl<'a> GitSegment<'a> {
    pub fn new(env: &'a dyn Environment, props: &'a Properties) -> Self {
        Self { env, props }
    }

    /// Whether git is installed and the directory is inside a work tree
    pub fn enabled(&self) -> bool {
        if !self.env.has_command(GIT_PROGRAM) {
            log::debug!("git executable not found");
            return false;
        }
        let inside = GitRunner::new(self.env).run(&["rev-parse", "--is-inside-work-tree"]);
        inside == "true"
    }

    /// Gather a fresh snapshot of the repository
    pub fn snapshot(&self) -> RepoSnapshot {
        let runner = GitRunner::new(self.env);
        let output = runner.run(&["status", "--porcelain", "-b", "--ignore-submodules"]);
        let parsed = parse_status(&output);
        let tracking = parsed.tracking;

        let mut snapshot = RepoSnapshot {
            working: parsed.working,
            staging: parsed.staging,
            ..Default::default()
        };

        if !tracking.local.is_empty() {
            snapshot.ahead = tracking.ahead.parse().unwrap_or(0);
            snapshot.behind = tracking.behind.parse().unwrap_or(0);
            snapshot.upstream = tracking.upstream;
        }

        snapshot.head = resolve_head(&runner, self.props, &tracking.local);

        if !snapshot.upstream.is_empty() && self.props.get_bool(SegmentOption::DisplayUpstreamIcon)
        {
            let remote = remote_name(&snapshot.upstream);
            snapshot.upstream_url = runner.run(&["remote", "get-url", remote]);
        }

        if self.props.get_bool(SegmentOption::DisplayStashCount) {
            snapshot.stash_count =
                runner.run(&["rev-list", "--walk-reflogs", "--count", "refs/stash"]);
        }

        snapshot
    }

    /// Render the segment text. Assumes [`GitSegment::enabled`] returned true.
    pub fn render(&self) -> String {
        format_segment(&self.snapshot(), self.props)
    }
}
