//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PlatformConfig, PrState, PullRequestRecord, RepositoryInfo};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use octocrab::params::pulls::Sort;
use octocrab::params::{Direction, State};
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `account` and `secret` are sent as basic auth; a personal access
    /// token works as the secret.
    pub fn new(
        account: &str,
        secret: &str,
        owner: String,
        repo: String,
        host: Option<String>,
    ) -> Result<Self> {
        let mut builder =
            Octocrab::builder().basic_auth(account.to_string(), secret.to_string());

        if let Some(ref h) = host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self {
            client,
            config: PlatformConfig { owner, repo, host },
        })
    }
}

/// Merged flag and state for a PR
///
/// The list endpoint leaves `merged` unset, so a merge timestamp alone is
/// enough to count a PR as merged.
fn merge_status(
    state: Option<&octocrab::models::IssueState>,
    merged: Option<bool>,
    merged_at: Option<DateTime<Utc>>,
) -> (bool, PrState) {
    let merged = merged.unwrap_or(false) || merged_at.is_some();

    let state = match state {
        Some(octocrab::models::IssueState::Open) => PrState::Open,
        // IssueState is non-exhaustive, so use wildcard for Closed and any future variants
        _ if merged => PrState::Merged,
        _ => PrState::Closed,
    };

    (merged, state)
}

/// Helper to convert octocrab PR to our `PullRequestRecord` type
fn pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequestRecord {
    let (merged, state) = merge_status(pr.state.as_ref(), pr.merged, pr.merged_at);

    PullRequestRecord {
        number: pr.number,
        title: pr.title.as_deref().unwrap_or_default().to_string(),
        author: pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_default(),
        base_ref: pr.base.ref_field.clone(),
        merged,
        merged_at: pr.merged_at,
        state,
    }
}

/// HTTP status carried by an octocrab error, if GitHub answered at all
fn status_code(err: &octocrab::Error) -> Option<u16> {
    match err {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}

/// A 404 on a single-PR lookup is the user's typo; any other failure is fatal
fn not_found(pr_number: u64, status: Option<u16>) -> Option<Error> {
    match status {
        Some(404) => Some(Error::PrNotFound(pr_number)),
        _ => None,
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn get_repository(&self) -> Result<RepositoryInfo> {
        debug!(owner = %self.config.owner, repo = %self.config.repo, "getting repository");
        let repo = self
            .client
            .repos(&self.config.owner, &self.config.repo)
            .get()
            .await?;

        let info = RepositoryInfo {
            full_name: repo
                .full_name
                .unwrap_or_else(|| format!("{}/{}", self.config.owner, repo.name)),
        };
        debug!(full_name = %info.full_name, "got repository");
        Ok(info)
    }

    async fn current_user(&self) -> Result<String> {
        let user = self.client.current().user().await?;
        debug!(login = %user.login, "authenticated");
        Ok(user.login)
    }

    async fn get_pull_request(&self, pr_number: u64) -> Result<PullRequestRecord> {
        debug!(pr_number, "getting PR");
        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .get(pr_number)
            .await
            .map_err(|e| not_found(pr_number, status_code(&e)).unwrap_or(Error::Octocrab(e)))?;

        let record = pr_from_octocrab(&pr);
        debug!(pr_number, merged = record.merged, base = %record.base_ref, "got PR");
        Ok(record)
    }

    async fn list_closed_pull_requests(
        &self,
        base: &str,
        page: u32,
    ) -> Result<Vec<PullRequestRecord>> {
        debug!(base, page, "listing closed PRs");
        let prs = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .list()
            .state(State::Closed)
            .base(base)
            .sort(Sort::Updated)
            .direction(Direction::Descending)
            .page(page)
            .send()
            .await?;

        let result: Vec<PullRequestRecord> = prs.items.iter().map(pr_from_octocrab).collect();
        debug!(base, page, count = result.len(), "listed closed PRs");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use octocrab::models::IssueState;

    fn list_item(merged_at: Option<&str>) -> octocrab::models::pulls::PullRequest {
        let mut json = serde_json::json!({
            "url": "https://api.github.com/repos/test/game/pulls/12",
            "id": 1012,
            "number": 12,
            "state": "closed",
            "title": "[IN: add enemy]",
            "locked": false,
            "draft": false,
            "head": { "ref": "feature/enemy", "sha": "aaa111" },
            "base": { "ref": "develop", "sha": "bbb222" }
        });
        if let Some(at) = merged_at {
            json["merged_at"] = serde_json::Value::String(at.to_string());
        }
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_list_item_with_merge_time_counts_as_merged() {
        let record = pr_from_octocrab(&list_item(Some("2024-03-01T12:00:00Z")));

        assert!(record.merged);
        assert_eq!(record.state, PrState::Merged);
        assert_eq!(
            record.merged_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(record.number, 12);
        assert_eq!(record.title, "[IN: add enemy]");
        assert_eq!(record.base_ref, "develop");
    }

    #[test]
    fn test_list_item_without_merge_time_is_closed() {
        let record = pr_from_octocrab(&list_item(None));

        assert!(!record.merged);
        assert_eq!(record.state, PrState::Closed);
        assert!(record.merge_time().is_none());
    }

    #[test]
    fn test_merge_status_derives_flag_from_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        assert_eq!(
            merge_status(Some(&IssueState::Closed), None, Some(at)),
            (true, PrState::Merged)
        );
        assert_eq!(
            merge_status(Some(&IssueState::Closed), Some(true), None),
            (true, PrState::Merged)
        );
        assert_eq!(merge_status(None, None, None), (false, PrState::Closed));
        assert_eq!(
            merge_status(Some(&IssueState::Open), None, None),
            (false, PrState::Open)
        );
    }

    #[test]
    fn test_lookup_404_is_recoverable_not_found() {
        let err = not_found(77, Some(404)).expect("404 maps to not found");
        assert!(matches!(err, Error::PrNotFound(77)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_lookup_other_failures_stay_fatal() {
        for status in [Some(401), Some(403), Some(500), None] {
            assert!(not_found(77, status).is_none(), "status {status:?}");
        }
    }
}
