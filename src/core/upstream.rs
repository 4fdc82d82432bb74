//! Recognition of the hosting service behind an upstream remote.

use crate::core::config::{Properties, SegmentOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamHost {
    GitHub,
    GitLab,
    Bitbucket,
    Generic,
}

impl UpstreamHost {
    /// Classify a remote URL by substring, checked in the order GitHub, GitLab, Bitbucket
    pub fn from_url(url: &str) -> Self {
        if url.contains("github") {
            UpstreamHost::GitHub
        } else if url.contains("gitlab") {
            UpstreamHost::GitLab
        } else if url.contains("bitbucket") {
            UpstreamHost::Bitbucket
        } else {
            UpstreamHost::Generic
        }
    }

    pub fn icon_option(&self) -> SegmentOption {
        match self {
            UpstreamHost::GitHub => SegmentOption::GithubIcon,
            UpstreamHost::GitLab => SegmentOption::GitlabIcon,
            UpstreamHost::Bitbucket => SegmentOption::BitbucketIcon,
            UpstreamHost::Generic => SegmentOption::GitIcon,
        }
    }

    pub fn icon(&self, props: &Properties) -> String {
        props.get_string(self.icon_option())
    }
}

/// Remote part of an upstream name: `origin/feature/x` -> `origin`
pub fn remote_name(upstream: &str) -> &str {
    upstream.split('/').next().unwrap_or_default()
}
