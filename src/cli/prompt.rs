//! Validation loops for the interactive prompts
//!
//! Each loop keeps asking until the answer is usable. Only recoverable
//! errors are swallowed; anything else ends the session.

use crate::cli::style::{Stylize, check, cross};
use anstream::println;
use chrono::{DateTime, Local, Utc};
use dialoguer::Input;
use pr_lineup::error::{Error, Result};
use pr_lineup::platform::PlatformService;
use pr_lineup::timestamp::parse_build_start;
use pr_lineup::types::PullRequestRecord;
use pr_lineup::window::acquire_reference_pr;

fn read_line(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| Error::Internal(format!("Failed to read input: {e}")))
}

/// Parse a PR number as typed, with or without a leading `#`
pub fn parse_pr_number(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    digits
        .parse::<u64>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| Error::UserInput(format!("'{trimmed}' is not a PR number")))
}

/// Ask for the previous build's last merged PR until a merged one is given
pub async fn prompt_reference_pr(platform: &dyn PlatformService) -> Result<PullRequestRecord> {
    loop {
        let input = read_line("Last merged PR number of the previous build (#)")?;

        let attempt = match parse_pr_number(&input) {
            Ok(number) => acquire_reference_pr(platform, number).await,
            Err(e) => Err(e),
        };

        match attempt {
            Ok(pr) => {
                println!(
                    "{} \"{}\" (-> {}, {})",
                    check(),
                    pr.title,
                    pr.base_ref.accent(),
                    pr.state.muted()
                );
                println!();
                return Ok(pr);
            }
            Err(e) if e.is_recoverable() => {
                println!("{} {}", cross(), e.warn());
                println!();
            }
            Err(e) => return Err(e),
        }
    }
}

/// Ask for the build start time until it parses; empty means now
pub fn prompt_build_start() -> Result<DateTime<Utc>> {
    loop {
        let input = read_line(
            "Start time of this build (e.g. \"12:30\", \"2019/1/23 9:30\"; empty = now)",
        )?;

        match parse_build_start(&input, &Local::now()) {
            Ok(at) => {
                println!(
                    "Build started at: {}",
                    at.with_timezone(&Local)
                        .format("%Y/%m/%d %H:%M:%S %:z")
                        .accent()
                );
                println!();
                return Ok(at);
            }
            Err(e) if e.is_recoverable() => {
                println!("{} {}", cross(), e.warn());
            }
            Err(e) => return Err(e),
        }
    }
}
