//! Platform services for GitHub
//!
//! Provides the narrow slice of the hosting API that window resolution needs.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{PullRequestRecord, RepositoryInfo};
use async_trait::async_trait;

/// Platform service trait for the read-only PR queries
///
/// Implemented by [`GitHubService`] for real runs and by test doubles, so
/// the resolver never touches an HTTP client directly.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Fetch repository metadata (also proves the credentials work)
    async fn get_repository(&self) -> Result<RepositoryInfo>;

    /// Login of the authenticated account
    async fn current_user(&self) -> Result<String>;

    /// Get a single PR by number
    ///
    /// Returns [`Error::PrNotFound`](crate::error::Error::PrNotFound) when the
    /// repository has no such PR.
    async fn get_pull_request(&self, pr_number: u64) -> Result<PullRequestRecord>;

    /// List one page of closed PRs targeting `base`
    ///
    /// Pages are 1-based and sorted by last update time, newest first. The
    /// page size is whatever the platform defaults to. An empty page means
    /// the listing is exhausted.
    async fn list_closed_pull_requests(
        &self,
        base: &str,
        page: u32,
    ) -> Result<Vec<PullRequestRecord>>;
}
