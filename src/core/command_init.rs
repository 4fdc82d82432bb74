//! Centralized initialization shared by the CLI commands.
//!
//! Every command needs the same two things: an [`Environment`] rooted at the
//! directory the user asked for, and the option [`Properties`] assembled from
//! the config file and `--set` overrides. [`SegmentCommandInit`] builds them from
//! the global [`CommandOptions`].
//!
//! # Public API
//! - [`CommandOptions`]: Global flags as parsed from the command line
//! - [`SegmentCommandInit`]: Initializer with static methods
//! - [`SegmentContext`]: Initialized context ready to render with
//!
//! [`Environment`]: crate::core::env::Environment

use crate::core::{config::Properties, env::SystemEnvironment, error::Result};
use std::env;
use std::path::PathBuf;

/// Global flags shared by all commands
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Run as if started in this directory
    pub directory: Option<PathBuf>,
    /// Explicit config file instead of the default location
    pub config: Option<PathBuf>,
    /// `key=value` option overrides, applied after the config file
    pub overrides: Vec<String>,
}

pub struct SegmentContext {
    pub env: SystemEnvironment,
    pub props: Properties,
}

pub struct SegmentCommandInit;

impl SegmentCommandInit {
    /// Build the environment and load the options
    pub fn initialize(options: &CommandOptions) -> Result<SegmentContext> {
        let props = Self::properties(options)?;
        let env = Self::environment(options)?;
        Ok(SegmentContext { env, props })
    }

    /// Environment rooted at `--directory`, or the current directory
    pub fn environment(options: &CommandOptions) -> Result<SystemEnvironment> {
        let work_dir = match &options.directory {
            Some(directory) => directory.clone(),
            None => env::current_dir()?,
        };
        log::debug!("Working directory: {}", work_dir.display());
        Ok(SystemEnvironment::discover(work_dir))
    }

    /// Options from the config file with overrides applied
    pub fn properties(options: &CommandOptions) -> Result<Properties> {
        Properties::load(options.config.as_deref())?.with_overrides(&options.overrides)
    }
}
