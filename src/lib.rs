//! Git Segment - a single-line git status summary for shell prompts.
//!
//! Given a working directory, git-segment reports which ref is checked out, how
//! it relates to its upstream, whether a rebase, merge or cherry-pick is in
//! progress, and how many files are staged, modified or untracked. Every glyph
//! is a named option so one implementation serves many prompt themes.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`GitSegment`]: `enabled()` and `render()` for one directory
//! - [`Environment`]: Injected process and metadata capabilities
//! - [`Properties`] / [`SegmentOption`]: Named options with defaults
//! - Parsing, detection and formatting building blocks
//!
//! # Example
//! ```no_run
//! use git_segment::{GitSegment, Properties, SystemEnvironment};
//!
//! let env = SystemEnvironment::discover(".");
//! let props = Properties::new();
//! let segment = GitSegment::new(&env, &props);
//! if segment.enabled() {
//!     println!("{}", segment.render());
//! }
//! ```

pub mod commands;
pub mod core;

// Re-export the core public API for external users

// Error handling
pub use crate::core::{GitSegmentError, Result};

// Capabilities
pub use crate::core::{Environment, GitRunner, SystemEnvironment};

// Configuration
pub use crate::core::{OptionDefault, Properties, SegmentOption};

// Parsing and detection
pub use crate::core::{
    parse_status, resolve_head, Area, BranchTracking, ChangeKind, HeadOperation, ParsedStatus,
    StatusModel, UpstreamHost,
};

// Entry point and rendering
pub use crate::core::{format_segment, format_tally, GitSegment, RepoSnapshot};
