//! Interactive shell around the library

mod prompt;
mod report;
pub mod style;

pub use report::{ReportArgs, run_report};

use anstream::println;
use async_trait::async_trait;
use pr_lineup::window::ProgressCallback;
use style::Stylize;

/// Prints scan progress to stdout, one line per page
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_page(&self, page: u32) {
        println!("{}", format!("Looking at page {page}...").muted());
    }

    async fn on_message(&self, message: &str) {
        println!("{}", message.muted());
    }
}
