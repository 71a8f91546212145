//! pr-lineup CLI

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::style::Stylize;
use cli::{ReportArgs, run_report};
use pr_lineup::config::load_config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Line up the PRs merged into a branch since the previous build
#[derive(Parser, Debug)]
#[command(name = "pr-lineup", version, about)]
struct Cli {
    /// Repository owner (user or organization)
    owner: String,

    /// Repository name
    repo: String,

    /// Account name or email address
    account: String,

    /// Password or personal access token
    secret: String,

    /// Path to config file (defaults to <config dir>/pr-lineup/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// GitHub Enterprise host (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Give up after scanning this many pages (overrides the config file)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_pages: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pr_lineup=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    if cli.host.is_some() {
        config.host = cli.host;
    }
    if let Some(max_pages) = cli.max_pages {
        config.max_pages = max_pages;
    }

    let args = ReportArgs {
        owner: cli.owner,
        repo: cli.repo,
        account: cli.account,
        secret: cli.secret,
    };

    run_report(args, &config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            anstream::eprintln!("{} {e:#}", "error:".error());
            ExitCode::FAILURE
        }
    }
}
