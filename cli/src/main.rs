//! github-activity
//!
//! Prints a short summary of a GitHub user's recent public activity:
//!
//! ```text
//! $ github-activity octocat
//! - octocat pushed 3 commits (octocat/Hello-World)
//! - octocat starred rust-lang/rust
//! ```
//!
//! Configuration comes from the environment (see `activity::Config`).
//! Logs go to stderr and are controlled with `RUST_LOG`.

use std::sync::Arc;

use activity::{ActivityService, Config, GitHubClientImpl};
use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Summarize a GitHub user's recent public activity.
#[derive(Debug, Parser)]
#[command(name = "github-activity", version)]
struct Cli {
    /// GitHub username whose public events to summarize.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    username: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs on stderr; stdout carries only the summary
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(api_base_url = %config.api_base_url, "Loaded configuration");

    let client = GitHubClientImpl::new(&config).context("Failed to build HTTP client")?;
    let service = ActivityService::new(Arc::new(client));

    let output = service
        .render_user_activity(&cli.username)
        .await
        .with_context(|| format!("Failed to load activity for {}", cli.username))?;

    println!("{}", output);
    Ok(())
}
