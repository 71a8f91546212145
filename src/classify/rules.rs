//! Title tag rules

use super::Category;
use regex::Regex;
use std::sync::LazyLock;

/// How a rule recognises a title
#[derive(Debug)]
pub enum TagMatcher {
    /// Title starts with this literal text
    Prefix(&'static str),
    /// Title matches this regex (patterns are anchored with `^`)
    Pattern(Regex),
}

impl TagMatcher {
    /// Check a title against this matcher
    pub fn matches(&self, title: &str) -> bool {
        match self {
            Self::Prefix(prefix) => title.starts_with(prefix),
            Self::Pattern(re) => re.is_match(title),
        }
    }
}

/// One entry in the rule list
#[derive(Debug)]
pub struct TagRule {
    /// Category assigned on match
    pub category: Category,
    /// Matcher for the title
    pub matcher: TagMatcher,
}

fn pattern(re: &str) -> TagMatcher {
    TagMatcher::Pattern(Regex::new(re).expect("tag pattern must compile"))
}

/// Ordered rules, evaluated first match wins.
///
/// `Category::InvalidTag` has no rule; it is the fallback.
pub static TAG_RULES: LazyLock<Vec<TagRule>> = LazyLock::new(|| {
    vec![
        TagRule {
            category: Category::AllGame,
            matcher: TagMatcher::Prefix("[IN&OUT:"),
        },
        TagRule {
            category: Category::InGame,
            matcher: pattern(r"^\[(IN|IN-AI|IN-STAGE):"),
        },
        TagRule {
            category: Category::OutGame,
            matcher: TagMatcher::Prefix("[OUT:"),
        },
        TagRule {
            category: Category::Asset,
            matcher: TagMatcher::Prefix("[ASSET:"),
        },
        TagRule {
            category: Category::Other,
            matcher: pattern(r"^\[(TOOL:|DEBUG:|META|OTHER|DO_NOT_MERGE)"),
        },
    ]
});
