//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use pr_lineup::error::{Error, Result};
use pr_lineup::platform::PlatformService;
use pr_lineup::types::{PlatformConfig, PullRequestRecord, RepositoryInfo};
use pr_lineup::window::ProgressCallback;
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `list_closed_pull_requests`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCall {
    pub base: String,
    pub page: u32,
}

/// Simple mock platform service for testing
///
/// Manually implements `PlatformService` rather than using mockall.
///
/// Features:
/// - Single PR lookups from a map (missing number = not found)
/// - Listing pages per base branch (pages past the end are empty)
/// - Optional endless listing for ceiling tests
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: PlatformConfig,
    login: String,
    prs: Mutex<HashMap<u64, PullRequestRecord>>,
    pages: Mutex<HashMap<String, Vec<Vec<PullRequestRecord>>>>,
    endless_filler: Mutex<Option<PullRequestRecord>>,
    // Call tracking
    get_pr_calls: Mutex<Vec<u64>>,
    list_calls: Mutex<Vec<ListCall>>,
    // Error injection
    error_on_list: Mutex<Option<String>>,
    error_on_get_pr: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            login: "release-manager".to_string(),
            prs: Mutex::new(HashMap::new()),
            pages: Mutex::new(HashMap::new()),
            endless_filler: Mutex::new(None),
            get_pr_calls: Mutex::new(Vec::new()),
            list_calls: Mutex::new(Vec::new()),
            error_on_list: Mutex::new(None),
            error_on_get_pr: Mutex::new(None),
        }
    }

    // === Setup methods ===

    /// Make a PR available to `get_pull_request`
    pub fn add_pr(&self, pr: PullRequestRecord) {
        self.prs.lock().unwrap().insert(pr.number, pr);
    }

    /// Set the pages returned for a base branch (index 0 = page 1)
    pub fn set_pages(&self, base: &str, pages: Vec<Vec<PullRequestRecord>>) {
        self.pages.lock().unwrap().insert(base.to_string(), pages);
    }

    /// After the configured pages run out, keep returning this PR forever
    pub fn set_endless_filler(&self, pr: PullRequestRecord) {
        *self.endless_filler.lock().unwrap() = Some(pr);
    }

    // === Error injection methods ===

    /// Make `list_closed_pull_requests` return an error
    pub fn fail_list(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `get_pull_request` return a transport-style error
    pub fn fail_get_pr(&self, msg: &str) {
        *self.error_on_get_pr.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Get all PR numbers `get_pull_request` was called with
    pub fn get_pr_calls(&self) -> Vec<u64> {
        self.get_pr_calls.lock().unwrap().clone()
    }

    /// Get all `list_closed_pull_requests` calls
    pub fn get_list_calls(&self) -> Vec<ListCall> {
        self.list_calls.lock().unwrap().clone()
    }

    /// Pages requested, in order
    pub fn requested_pages(&self) -> Vec<u32> {
        self.get_list_calls().iter().map(|c| c.page).collect()
    }

    /// Assert that every listing used this base branch
    pub fn assert_listed_only_base(&self, base: &str) {
        let calls = self.get_list_calls();
        assert!(
            calls.iter().all(|c| c.base == base),
            "Expected all listings on {base} but got: {calls:?}"
        );
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn get_repository(&self) -> Result<RepositoryInfo> {
        Ok(RepositoryInfo {
            full_name: format!("{}/{}", self.config.owner, self.config.repo),
        })
    }

    async fn current_user(&self) -> Result<String> {
        Ok(self.login.clone())
    }

    async fn get_pull_request(&self, pr_number: u64) -> Result<PullRequestRecord> {
        self.get_pr_calls.lock().unwrap().push(pr_number);

        if let Some(msg) = self.error_on_get_pr.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        self.prs
            .lock()
            .unwrap()
            .get(&pr_number)
            .cloned()
            .ok_or(Error::PrNotFound(pr_number))
    }

    async fn list_closed_pull_requests(
        &self,
        base: &str,
        page: u32,
    ) -> Result<Vec<PullRequestRecord>> {
        self.list_calls.lock().unwrap().push(ListCall {
            base: base.to_string(),
            page,
        });

        if let Some(msg) = self.error_on_list.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let pages = self.pages.lock().unwrap();
        let configured = pages
            .get(base)
            .and_then(|p| p.get(page as usize - 1))
            .cloned();

        Ok(configured.unwrap_or_else(|| {
            self.endless_filler
                .lock()
                .unwrap()
                .clone()
                .map(|pr| vec![pr])
                .unwrap_or_default()
        }))
    }
}

/// Progress callback that records what it was told
#[derive(Default)]
pub struct RecordingProgress {
    pub pages: Mutex<Vec<u32>>,
    pub messages: Mutex<Vec<String>>,
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_page(&self, page: u32) {
        self.pages.lock().unwrap().push(page);
    }

    async fn on_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
