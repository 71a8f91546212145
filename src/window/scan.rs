//! Paginated scan for the reference PR - effectful, bounded

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::PullRequestRecord;
use async_trait::async_trait;
use tracing::debug;

/// Default page ceiling for [`scan_until_found`]
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Progress reporting for the page scan
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called right before page `page` is requested
    async fn on_page(&self, page: u32);

    /// Free-form status message
    async fn on_message(&self, message: &str);
}

/// Options for the page scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Give up after this many pages without seeing the reference PR
    pub max_pages: u32,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Everything fetched during a scan
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// All PRs from all fetched pages, in fetch order (may contain duplicates)
    pub pull_requests: Vec<PullRequestRecord>,
    /// Number of pages fetched
    pub pages: u32,
}

/// Page through closed PRs on the reference PR's base branch until it shows up
///
/// Pages are requested one at a time, starting at 1, and the stop condition
/// is re-checked against everything accumulated so far before the next
/// request goes out. Sorting by update time does not guarantee an old PR
/// ever appears, so the scan fails with [`Error::Resolution`] when the
/// listing runs dry or `options.max_pages` is exceeded.
pub async fn scan_until_found(
    platform: &dyn PlatformService,
    reference: &PullRequestRecord,
    options: &ScanOptions,
    progress: &dyn ProgressCallback,
) -> Result<ScanResult> {
    let base = reference.base_ref.as_str();
    let mut result = ScanResult::default();

    for page in 1..=options.max_pages {
        progress.on_page(page).await;

        let items = platform.list_closed_pull_requests(base, page).await?;
        result.pages = page;

        if items.is_empty() {
            debug!(base, page, "listing exhausted");
            return Err(Error::Resolution(format!(
                "PR #{} never appeared in closed PRs on '{base}' ({} page(s) scanned)",
                reference.number,
                page - 1
            )));
        }

        result.pull_requests.extend(items);

        if result
            .pull_requests
            .iter()
            .any(|pr| pr.number == reference.number)
        {
            debug!(base, pages = page, total = result.pull_requests.len(), "found reference PR");
            progress.on_message("Done scanning.").await;
            return Ok(result);
        }
    }

    Err(Error::Resolution(format!(
        "PR #{} not found on '{base}' within {} page(s)",
        reference.number, options.max_pages
    )))
}
