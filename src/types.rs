//! Core types for pr-lineup

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pull request as fetched from the platform
///
/// Never mutated after it is fetched; grouping and filtering build new
/// collections instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestRecord {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Login of the PR author
    pub author: String,
    /// Base branch name
    pub base_ref: String,
    /// Whether the PR was merged
    pub merged: bool,
    /// When the PR was merged (None if it never was)
    pub merged_at: Option<DateTime<Utc>>,
    /// Current state of the PR
    pub state: PrState,
}

impl PullRequestRecord {
    /// Merge timestamp, but only for PRs that are actually merged.
    ///
    /// A timestamp on an unmerged PR or a merged flag without a timestamp
    /// both yield `None`.
    pub fn merge_time(&self) -> Option<DateTime<Utc>> {
        self.merged_at.filter(|_| self.merged)
    }
}

/// PR state (open, closed, merged)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrState {
    /// PR is open
    Open,
    /// PR was closed without merging
    Closed,
    /// PR was merged
    Merged,
}

impl std::fmt::Display for PrState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Merged => write!(f, "merged"),
        }
    }
}

/// Repository metadata shown at the start of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    /// `owner/name` as reported by the platform
    pub full_name: String,
}

/// Platform configuration
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}
