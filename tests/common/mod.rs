//! Shared test fixtures

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{ListCall, MockPlatformService, RecordingProgress};

use chrono::{DateTime, TimeZone, Utc};
use pr_lineup::types::{PlatformConfig, PrState, PullRequestRecord};

/// Config for a GitHub repo named `test/game`
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        owner: "test".to_string(),
        repo: "game".to_string(),
        host: None,
    }
}

/// 2024-03-01 at `hour:minute` UTC
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, hour, minute, 0).unwrap()
}

/// A PR merged into `develop` at `merged_at`
pub fn merged_pr(number: u64, title: &str, merged_at: DateTime<Utc>) -> PullRequestRecord {
    PullRequestRecord {
        number,
        title: title.to_string(),
        author: format!("dev{number}"),
        base_ref: "develop".to_string(),
        merged: true,
        merged_at: Some(merged_at),
        state: PrState::Merged,
    }
}

/// A PR on `develop` closed without merging
pub fn closed_pr(number: u64, title: &str) -> PullRequestRecord {
    PullRequestRecord {
        number,
        title: title.to_string(),
        author: format!("dev{number}"),
        base_ref: "develop".to_string(),
        merged: false,
        merged_at: None,
        state: PrState::Closed,
    }
}

/// Titled PR with a fixed merge time, for classification tests
pub fn titled(number: u64, title: &str) -> PullRequestRecord {
    merged_pr(number, title, at(12, 0))
}
