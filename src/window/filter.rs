//! Window filtering - pure functions, no I/O

use crate::error::{Error, Result};
use crate::types::PullRequestRecord;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// The reporting window
///
/// Both bounds are exclusive. `after >= before` is allowed and simply
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Base branch the PRs must target
    pub base_ref: String,
    /// Merge time of the reference PR (exclusive lower bound)
    pub after: DateTime<Utc>,
    /// Build start time (exclusive upper bound)
    pub before: DateTime<Utc>,
}

impl Window {
    /// Build the window anchored at a merged reference PR
    pub fn from_reference(reference: &PullRequestRecord, cutoff: DateTime<Utc>) -> Result<Self> {
        let after = reference
            .merge_time()
            .ok_or(Error::NotMerged(reference.number))?;

        Ok(Self {
            base_ref: reference.base_ref.clone(),
            after,
            before: cutoff,
        })
    }

    /// Whether the bounds can contain anything at all
    pub fn is_degenerate(&self) -> bool {
        self.after >= self.before
    }

    /// Whether a single PR was merged strictly inside the window
    pub fn contains(&self, pr: &PullRequestRecord) -> bool {
        pr.merge_time()
            .is_some_and(|at| self.after < at && at < self.before)
    }

    /// Keep the PRs merged strictly inside the window
    ///
    /// A PR that was listed on more than one page is kept once (first
    /// occurrence wins). Result order follows the input.
    pub fn filter(&self, prs: &[PullRequestRecord]) -> Vec<PullRequestRecord> {
        let mut seen = HashSet::new();
        prs.iter()
            .filter(|pr| seen.insert(pr.number))
            .filter(|pr| self.contains(pr))
            .cloned()
            .collect()
    }
}
