//! pr-lineup: line up the pull requests merged since the previous build
//!
//! The library holds the testable core: resolving the merge window on a
//! branch and grouping PRs by their title tag. The `pr-lineup` binary is a
//! thin interactive shell around it.

pub mod classify;
pub mod config;
pub mod error;
pub mod platform;
pub mod report;
pub mod timestamp;
pub mod types;
pub mod window;
