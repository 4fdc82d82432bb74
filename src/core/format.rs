//! Rendering of a [`RepoSnapshot`] into the final segment text.
//!
//! Pure functions of the snapshot and the options: no git invocation happens
//! here. Fragments are appended in a fixed order:
//!
//! ```text
//! [host icon] head [ +ahead] [ -behind] [ =| !=] [ ~staging] [separator] [ #working] [ stash]
//! ```

use crate::core::change::ChangeKind;
use crate::core::config::{Properties, SegmentOption};
use crate::core::segment::RepoSnapshot;
use crate::core::status::StatusModel;
use crate::core::upstream::UpstreamHost;

pub fn format_segment(snapshot: &RepoSnapshot, props: &Properties) -> String {
    let mut buffer = String::new();
    let has_upstream = !snapshot.upstream.is_empty();

    if has_upstream && props.get_bool(SegmentOption::DisplayUpstreamIcon) {
        buffer.push_str(&UpstreamHost::from_url(&snapshot.upstream_url).icon(props));
    }
    buffer.push_str(&snapshot.head);

    if !props.get_bool(SegmentOption::DisplayStatus) {
        return buffer;
    }

    let mut counter = itoa::Buffer::new();
    if snapshot.ahead > 0 {
        buffer.push(' ');
        buffer.push_str(&props.get_string(SegmentOption::BranchAheadIcon));
        buffer.push_str(counter.format(snapshot.ahead));
    }
    if snapshot.behind > 0 {
        buffer.push(' ');
        buffer.push_str(&props.get_string(SegmentOption::BranchBehindIcon));
        buffer.push_str(counter.format(snapshot.behind));
    }
    if snapshot.ahead == 0 && snapshot.behind == 0 && has_upstream {
        buffer.push(' ');
        buffer.push_str(&props.get_string(SegmentOption::BranchIdenticalIcon));
    } else if !has_upstream {
        buffer.push(' ');
        buffer.push_str(&props.get_string(SegmentOption::BranchGoneIcon));
    }

    let staging = format_tally(
        &snapshot.staging,
        &props.get_string(SegmentOption::LocalStagedIcon),
    );
    let working = format_tally(
        &snapshot.working,
        &props.get_string(SegmentOption::LocalWorkingIcon),
    );
    buffer.push_str(&staging);
    if !staging.is_empty() && !working.is_empty() {
        buffer.push_str(&props.get_string(SegmentOption::StatusSeparatorIcon));
    }
    buffer.push_str(&working);

    if props.get_bool(SegmentOption::DisplayStashCount) && !snapshot.stash_count.is_empty() {
        buffer.push(' ');
        buffer.push_str(&props.get_string(SegmentOption::StashCountIcon));
        buffer.push_str(&snapshot.stash_count);
    }

    buffer
}

/// `" <prefix> +1 ~2"` for the nonzero counts of `model`, or "" when all are zero
pub fn format_tally(model: &StatusModel, prefix: &str) -> String {
    let mut counter = itoa::Buffer::new();
    let mut counts = String::new();
    for kind in ChangeKind::ALL {
        let count = model.count(kind);
        if count > 0 {
            counts.push(' ');
            counts.push_str(kind.sign());
            counts.push_str(counter.format(count));
        }
    }

    if counts.is_empty() {
        return counts;
    }
    format!(" {prefix}{counts}")
}
