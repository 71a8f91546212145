//! Changelog report model and rendering
//!
//! Building the report is pure; the CLI only prints [`Report::render`].

use crate::classify::{CategoryGroup, group_by_category};
use crate::types::PullRequestRecord;
use chrono::{DateTime, FixedOffset};
use std::fmt;

/// Offset used for the footer timestamp unless configured otherwise (UTC+9)
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

/// The most recently merged PR in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastMerged {
    /// PR number
    pub number: u64,
    /// Merge time in the report offset
    pub merged_at: DateTime<FixedOffset>,
}

/// A report ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Nothing was merged in the window
    Empty {
        /// Branch the window was computed on
        base_branch: String,
    },
    /// PRs grouped by category
    Changelog {
        /// Branch the PRs were merged into
        base_branch: String,
        /// Non-empty groups in category order
        groups: Vec<CategoryGroup>,
        /// Most recently merged PR (by merge time)
        last_merged: Option<LastMerged>,
    },
}

/// Build the report for the PRs merged in a window
pub fn build_report(
    prs: &[PullRequestRecord],
    base_branch: &str,
    offset: FixedOffset,
) -> Report {
    if prs.is_empty() {
        return Report::Empty {
            base_branch: base_branch.to_string(),
        };
    }

    let last_merged = prs
        .iter()
        .filter_map(|pr| pr.merge_time().map(|at| (at, pr.number)))
        .max()
        .map(|(at, number)| LastMerged {
            number,
            merged_at: at.with_timezone(&offset),
        });

    Report::Changelog {
        base_branch: base_branch.to_string(),
        groups: group_by_category(prs),
        last_merged,
    }
}

impl Report {
    /// Whether there is anything to report
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Render as plain text, ready to paste into a chat message
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (base_branch, groups, last_merged) = match self {
            Self::Empty { .. } => return writeln!(f, "No newly merged PRs."),
            Self::Changelog {
                base_branch,
                groups,
                last_merged,
            } => (base_branch, groups, last_merged),
        };

        writeln!(f, "PRs newly merged into {base_branch} since the previous build:")?;
        writeln!(f)?;
        writeln!(f, "```")?;

        for group in groups {
            writeln!(f, "{}", group.category.label())?;
            for pr in &group.pull_requests {
                writeln!(f, "{} (#{}|{})", pr.title, pr.number, pr.author)?;
            }
            writeln!(f)?;
        }

        if let Some(last) = last_merged {
            writeln!(
                f,
                "Note: last merged PR is #{} ({})",
                last.number,
                last.merged_at.format("%Y/%m/%d %H:%M UTC%:z")
            )?;
        }

        writeln!(f, "```")
    }
}
