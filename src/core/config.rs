//! Named display options and the immutable lookup they are read from.
//!
//! Every glyph and toggle the segment uses is a [`SegmentOption`] with a typed
//! default. [`Properties`] is built once before a render from the optional JSON
//! config file plus `key=value` overrides and is never mutated afterwards.
//! Absent values always resolve to the option's default.

use crate::core::dirs::get_default_config_file;
use crate::core::error::{GitSegmentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentOption {
    /// Shown before a local branch name
    BranchIcon,
    /// Shown when the branch matches its upstream
    BranchIdenticalIcon,
    BranchAheadIcon,
    BranchBehindIcon,
    /// Shown when the branch has no upstream
    BranchGoneIcon,
    /// Prefix of the working tree tally
    LocalWorkingIcon,
    /// Prefix of the index tally
    LocalStagedIcon,
    /// Show anything after the head description
    DisplayStatus,
    RebaseIcon,
    CherryPickIcon,
    /// Shown before a detached commit hash
    CommitIcon,
    TagIcon,
    DisplayStashCount,
    StashCountIcon,
    /// Shown between the index and working tree tallies
    StatusSeparatorIcon,
    MergeIcon,
    /// Show the remote host icon before the head description
    DisplayUpstreamIcon,
    GithubIcon,
    BitbucketIcon,
    GitlabIcon,
    /// Remote host icon when the host is not recognized
    GitIcon,
}

/// Typed default of an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    Text(&'static str),
    Flag(bool),
}

impl fmt::Display for OptionDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionDefault::Text(text) => write!(f, "{text}"),
            OptionDefault::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

impl SegmentOption {
    /// All options in declaration order
    pub const ALL: [SegmentOption; 21] = [
        SegmentOption::BranchIcon,
        SegmentOption::BranchIdenticalIcon,
        SegmentOption::BranchAheadIcon,
        SegmentOption::BranchBehindIcon,
        SegmentOption::BranchGoneIcon,
        SegmentOption::LocalWorkingIcon,
        SegmentOption::LocalStagedIcon,
        SegmentOption::DisplayStatus,
        SegmentOption::RebaseIcon,
        SegmentOption::CherryPickIcon,
        SegmentOption::CommitIcon,
        SegmentOption::TagIcon,
        SegmentOption::DisplayStashCount,
        SegmentOption::StashCountIcon,
        SegmentOption::StatusSeparatorIcon,
        SegmentOption::MergeIcon,
        SegmentOption::DisplayUpstreamIcon,
        SegmentOption::GithubIcon,
        SegmentOption::BitbucketIcon,
        SegmentOption::GitlabIcon,
        SegmentOption::GitIcon,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SegmentOption::BranchIcon => "branch_icon",
            SegmentOption::BranchIdenticalIcon => "branch_identical_icon",
            SegmentOption::BranchAheadIcon => "branch_ahead_icon",
            SegmentOption::BranchBehindIcon => "branch_behind_icon",
            SegmentOption::BranchGoneIcon => "branch_gone_icon",
            SegmentOption::LocalWorkingIcon => "local_working_icon",
            SegmentOption::LocalStagedIcon => "local_staged_icon",
            SegmentOption::DisplayStatus => "display_status",
            SegmentOption::RebaseIcon => "rebase_icon",
            SegmentOption::CherryPickIcon => "cherry_pick_icon",
            SegmentOption::CommitIcon => "commit_icon",
            SegmentOption::TagIcon => "tag_icon",
            SegmentOption::DisplayStashCount => "display_stash_count",
            SegmentOption::StashCountIcon => "stash_count_icon",
            SegmentOption::StatusSeparatorIcon => "status_separator_icon",
            SegmentOption::MergeIcon => "merge_icon",
            SegmentOption::DisplayUpstreamIcon => "display_upstream_icon",
            SegmentOption::GithubIcon => "github_icon",
            SegmentOption::BitbucketIcon => "bitbucket_icon",
            SegmentOption::GitlabIcon => "gitlab_icon",
            SegmentOption::GitIcon => "git_icon",
        }
    }

    pub fn default_value(&self) -> OptionDefault {
        match self {
            SegmentOption::BranchIcon => OptionDefault::Text("BRANCH:"),
            SegmentOption::BranchIdenticalIcon => OptionDefault::Text("="),
            SegmentOption::BranchAheadIcon => OptionDefault::Text("+"),
            SegmentOption::BranchBehindIcon => OptionDefault::Text("-"),
            SegmentOption::BranchGoneIcon => OptionDefault::Text("!="),
            SegmentOption::LocalWorkingIcon => OptionDefault::Text("#"),
            SegmentOption::LocalStagedIcon => OptionDefault::Text("~"),
            SegmentOption::DisplayStatus => OptionDefault::Flag(true),
            SegmentOption::RebaseIcon => OptionDefault::Text("REBASE:"),
            SegmentOption::CherryPickIcon => OptionDefault::Text("CHERRY PICK:"),
            SegmentOption::CommitIcon => OptionDefault::Text("COMMIT:"),
            SegmentOption::TagIcon => OptionDefault::Text("TAG:"),
            SegmentOption::DisplayStashCount => OptionDefault::Flag(false),
            SegmentOption::StashCountIcon => OptionDefault::Text(""),
            SegmentOption::StatusSeparatorIcon => OptionDefault::Text(" |"),
            SegmentOption::MergeIcon => OptionDefault::Text("MERGING:"),
            SegmentOption::DisplayUpstreamIcon => OptionDefault::Flag(false),
            SegmentOption::GithubIcon => OptionDefault::Text("GITHUB"),
            SegmentOption::BitbucketIcon => OptionDefault::Text("BITBUCKET"),
            SegmentOption::GitlabIcon => OptionDefault::Text("GITLAB"),
            SegmentOption::GitIcon => OptionDefault::Text("GIT"),
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self.default_value(), OptionDefault::Flag(_))
    }

    pub fn from_key(key: &str) -> Option<SegmentOption> {
        SegmentOption::ALL
            .iter()
            .copied()
            .find(|option| option.key() == key)
    }

    fn default_flag(&self) -> bool {
        match self.default_value() {
            OptionDefault::Flag(flag) => flag,
            OptionDefault::Text(_) => false,
        }
    }
}

impl fmt::Display for SegmentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for SegmentOption {
    type Err = GitSegmentError;

    fn from_str(key: &str) -> Result<Self> {
        SegmentOption::from_key(key).ok_or_else(|| GitSegmentError::unknown_option(key))
    }
}

/// Immutable option lookup queried by the segment during a render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    values: HashMap<SegmentOption, Value>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object of option keys
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        let values: HashMap<SegmentOption, Value> = serde_json::from_str(content)?;
        Ok(Self { values })
    }

    /// Load options from `path`, or from the default config file when `path` is None.
    ///
    /// A missing default file yields the built-in defaults; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_file = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_file = get_default_config_file();
                if !default_file.exists() {
                    log::debug!(
                        "No config file at {}, using defaults",
                        default_file.display()
                    );
                    return Ok(Self::default());
                }
                default_file
            }
        };

        log::debug!("Loading config file: {}", config_file.display());
        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| GitSegmentError::config_read_failed(&config_file, e))?;

        Self::from_json_str(&content)
            .map_err(|e| GitSegmentError::config_parse_failed(&config_file, e))
    }

    /// Apply `key=value` overrides on top of the loaded values
    pub fn with_overrides<S: AsRef<str>>(mut self, overrides: &[S]) -> Result<Self> {
        for input in overrides {
            let input = input.as_ref();
            let (key, raw) = input
                .split_once('=')
                .ok_or_else(|| GitSegmentError::invalid_override(input))?;
            let option: SegmentOption = key.trim().parse()?;

            let value = if option.is_flag() {
                match raw.trim() {
                    "true" => Value::Bool(true),
                    "false" => Value::Bool(false),
                    other => return Err(GitSegmentError::invalid_flag_value(option.key(), other)),
                }
            } else {
                Value::String(raw.to_string())
            };

            self.values.insert(option, value);
        }
        Ok(self)
    }

    pub fn get_string(&self, option: SegmentOption) -> String {
        match self.values.get(&option) {
            Some(Value::String(value)) => value.clone(),
            Some(other) => {
                log::warn!("Option '{option}' expects a string, got {other}; using default");
                option.default_value().to_string()
            }
            None => option.default_value().to_string(),
        }
    }

    pub fn get_bool(&self, option: SegmentOption) -> bool {
        match self.values.get(&option) {
            Some(Value::Bool(value)) => *value,
            Some(other) => {
                log::warn!("Option '{option}' expects true or false, got {other}; using default");
                option.default_flag()
            }
            None => option.default_flag(),
        }
    }

    /// Value a render would see for `option`, as display text
    pub fn effective_value(&self, option: SegmentOption) -> String {
        if option.is_flag() {
            self.get_bool(option).to_string()
        } else {
            self.get_string(option)
        }
    }
}
