//! Report command - the whole interactive session

use crate::cli::CliProgress;
use crate::cli::prompt::{prompt_build_start, prompt_reference_pr};
use crate::cli::style::{Stylize, check, spinner_style};
use anstream::{print, println};
use indicatif::ProgressBar;
use pr_lineup::config::Config;
use pr_lineup::error::Result;
use pr_lineup::platform::{GitHubService, PlatformService};
use pr_lineup::report::build_report;
use pr_lineup::window::resolve_from_reference;
use std::time::Duration;
use tracing::debug;

/// Arguments for the report command
#[derive(Clone)]
pub struct ReportArgs {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Account used for basic auth
    pub account: String,
    /// Password or token for the account
    pub secret: String,
}

/// Run the report session
pub async fn run_report(args: ReportArgs, config: &Config) -> Result<()> {
    // =========================================================================
    // Phase 1: CONNECT - authenticate and show who we are
    // =========================================================================

    let platform = GitHubService::new(
        &args.account,
        &args.secret,
        args.owner,
        args.repo,
        config.host.clone(),
    )?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message("Connecting to GitHub...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let repository = platform.get_repository().await;
    let login = platform.current_user().await;
    spinner.finish_and_clear();

    let repository = repository?;
    let login = login?;

    println!("Repository: {}", repository.full_name.emphasis());
    println!("Signed in as: {}", login.accent());
    println!();

    // =========================================================================
    // Phase 2: ASK - reference PR and build start
    // =========================================================================

    let reference = prompt_reference_pr(&platform).await?;
    let cutoff = prompt_build_start()?;

    // =========================================================================
    // Phase 3: SCAN + REPORT
    // =========================================================================

    let resolved = resolve_from_reference(
        &platform,
        reference,
        cutoff,
        &config.scan_options(),
        &CliProgress,
    )
    .await?;
    debug!(pages = resolved.pages_scanned, "scan complete");
    println!();

    let merged = &resolved.pull_requests;
    let report = build_report(merged, &resolved.window.base_ref, config.utc_offset()?);
    if report.is_empty() {
        print!("{}", report.render().muted());
    } else {
        println!("{} {} PR(s) found", check(), merged.len().accent());
        println!();
        print!("{}", report.render());
    }

    Ok(())
}
