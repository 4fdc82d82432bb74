//! Core functionality for the git-segment tool.
//!
//! This module provides the pieces of a render, from running git to formatting
//! the final text, plus configuration, error handling and CLI helpers.

pub mod change;
pub mod command_init;
pub mod config;
pub mod dirs;
pub mod env;
pub mod error;
pub mod format;
pub mod head;
pub mod output;
pub mod runner;
pub mod segment;
pub mod status;
pub mod upstream;

#[cfg(test)]
pub(crate) mod testing;

// === Error handling ===
pub use error::{GitSegmentError, Result};

// === Capabilities ===
// Process execution and metadata probing, injected into every render
pub use env::{Environment, SystemEnvironment};
pub use runner::GitRunner;

// === Configuration ===
pub use config::{OptionDefault, Properties, SegmentOption};

// === Parsing and detection ===
pub use change::{Area, ChangeKind};
pub use head::{resolve_head, HeadOperation};
pub use status::{parse_status, BranchTracking, ParsedStatus, StatusModel};
pub use upstream::UpstreamHost;

// === Rendering ===
pub use format::{format_segment, format_tally};
pub use segment::{GitSegment, RepoSnapshot};

// === Command initialization ===
pub use command_init::{CommandOptions, SegmentCommandInit, SegmentContext};

// === Output formatting ===
pub use output::{format_option_line, print_error};
