//! Merge window resolution
//!
//! Three phases, matching the shape of the rest of the crate:
//! 1. Acquire - look up the reference PR and check it is merged (effectful)
//! 2. Scan - page through closed PRs until the reference PR shows up (effectful, bounded)
//! 3. Filter - keep the PRs merged strictly inside the window (pure)

mod filter;
mod scan;

pub use filter::Window;
pub use scan::{DEFAULT_MAX_PAGES, ProgressCallback, ScanOptions, ScanResult, scan_until_found};

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::PullRequestRecord;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Outcome of a successful resolution
#[derive(Debug, Clone)]
pub struct ResolvedWindow {
    /// The reference PR that anchors the lower bound
    pub reference: PullRequestRecord,
    /// The window the PRs were filtered against
    pub window: Window,
    /// PRs merged inside the window, in no particular order
    pub pull_requests: Vec<PullRequestRecord>,
    /// Number of pages fetched before the reference PR was found
    pub pages_scanned: u32,
}

/// Look up the reference PR and make sure it can anchor a window
///
/// Unknown numbers surface as [`Error::PrNotFound`]; unmerged PRs (or merged
/// PRs missing a merge timestamp) as [`Error::NotMerged`]. Both are user
/// errors the caller should re-prompt on.
pub async fn acquire_reference_pr(
    platform: &dyn PlatformService,
    pr_number: u64,
) -> Result<PullRequestRecord> {
    let pr = platform.get_pull_request(pr_number).await?;

    if pr.merge_time().is_none() {
        debug!(pr_number, merged = pr.merged, "reference PR rejected");
        return Err(Error::NotMerged(pr_number));
    }

    Ok(pr)
}

/// Resolve the set of PRs merged after `reference_number` and before `cutoff`
///
/// Looks the reference PR up first, then hands over to
/// [`resolve_from_reference`].
pub async fn resolve_window(
    platform: &dyn PlatformService,
    reference_number: u64,
    cutoff: DateTime<Utc>,
    options: &ScanOptions,
    progress: &dyn ProgressCallback,
) -> Result<ResolvedWindow> {
    let reference = acquire_reference_pr(platform, reference_number).await?;
    resolve_from_reference(platform, reference, cutoff, options, progress).await
}

/// Resolve the window for a reference PR that was already acquired
///
/// Scans and filters. An empty `pull_requests` is a valid result and means
/// nothing was merged in the window; failures to locate the reference PR
/// come back as [`Error::Resolution`].
pub async fn resolve_from_reference(
    platform: &dyn PlatformService,
    reference: PullRequestRecord,
    cutoff: DateTime<Utc>,
    options: &ScanOptions,
    progress: &dyn ProgressCallback,
) -> Result<ResolvedWindow> {
    let window = Window::from_reference(&reference, cutoff)?;

    let scan = scan_until_found(platform, &reference, options, progress).await?;
    let pull_requests = window.filter(&scan.pull_requests);

    debug!(
        reference = reference.number,
        pages = scan.pages,
        scanned = scan.pull_requests.len(),
        in_window = pull_requests.len(),
        degenerate = window.is_degenerate(),
        "resolved merge window"
    );

    Ok(ResolvedWindow {
        reference,
        window,
        pull_requests,
        pages_scanned: scan.pages,
    })
}
