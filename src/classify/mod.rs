//! Title classification and grouping
//!
//! Maps each PR title to a [`Category`] through an ordered rule list and
//! groups PRs for the report. Pure functions only.

mod rules;

pub use rules::{TAG_RULES, TagMatcher, TagRule};

use crate::types::PullRequestRecord;

/// Report section a PR belongs to
///
/// Declaration order is the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// `[IN&OUT: ...]` - touches the whole game
    AllGame,
    /// `[IN: ...]`, `[IN-AI: ...]`, `[IN-STAGE: ...]`
    InGame,
    /// `[OUT: ...]`
    OutGame,
    /// `[ASSET: ...]`
    Asset,
    /// Tooling, debug, meta and other housekeeping tags
    Other,
    /// Missing or malformed tag
    InvalidTag,
}

impl Category {
    /// Every category, in report order
    pub const ALL: [Self; 6] = [
        Self::AllGame,
        Self::InGame,
        Self::OutGame,
        Self::Asset,
        Self::Other,
        Self::InvalidTag,
    ];

    /// Section header used in the report
    pub const fn label(self) -> &'static str {
        match self {
            Self::AllGame => "Whole game",
            Self::InGame => "In-game",
            Self::OutGame => "Out-game",
            Self::Asset => "Assets",
            Self::Other => "Other",
            Self::InvalidTag => "Invalid PR tag",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A category and the PRs assigned to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    /// The category
    pub category: Category,
    /// PRs in this category, sorted by title
    pub pull_requests: Vec<PullRequestRecord>,
}

/// Classify a single title. Total: unknown tags land in `InvalidTag`.
pub fn classify_title(title: &str) -> Category {
    TAG_RULES
        .iter()
        .find(|rule| rule.matcher.matches(title))
        .map_or(Category::InvalidTag, |rule| rule.category)
}

/// Group PRs by category for the report
///
/// PRs are stably sorted by title (case-sensitive) first, so each group keeps
/// that order. Groups come out in category declaration order; empty groups
/// are left out.
pub fn group_by_category(prs: &[PullRequestRecord]) -> Vec<CategoryGroup> {
    let mut sorted: Vec<&PullRequestRecord> = prs.iter().collect();
    sorted.sort_by(|a, b| a.title.cmp(&b.title));

    Category::ALL
        .iter()
        .filter_map(|&category| {
            let members: Vec<PullRequestRecord> = sorted
                .iter()
                .filter(|pr| classify_title(&pr.title) == category)
                .map(|pr| (*pr).clone())
                .collect();

            (!members.is_empty()).then_some(CategoryGroup {
                category,
                pull_requests: members,
            })
        })
        .collect()
}
