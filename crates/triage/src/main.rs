//! pr-triage CLI - label pull requests from the files they change.

use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use github::GitHubClient;
use triage::config::Config;
use triage::engine::{Engine, RunOutcome, SkipReason};

/// Label pull requests from the files they change.
#[derive(Parser)]
#[command(name = "pr-triage")]
#[command(about = "Automated pull request triage and labeling")]
#[command(version)]
struct Cli {
    /// Repository to triage (owner/name format)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repo: String,

    /// Pull request number (overrides the triggering event payload)
    #[arg(long)]
    pr: Option<u64>,

    /// Compute the label plan without applying it
    #[arg(long)]
    dry_run: bool,

    /// GitHub API root (for GHES deployments)
    #[arg(long, env = "GITHUB_API_URL")]
    github_api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("triage=debug,github=debug,labeler=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config =
        Config::resolve(&cli.repo, cli.github_api_url).context("resolving configuration")?;

    let mut client = GitHubClient::new(
        config.token.clone(),
        config.owner.clone(),
        config.repo.clone(),
    )
    .context("building GitHub client")?;
    if let Some(api_url) = &config.api_url {
        client = client.with_base_url(api_url.clone());
    }

    let pr_number = cli.pr.or_else(|| {
        config
            .event_path
            .as_deref()
            .and_then(github::pr_number_from_event)
    });

    tracing::info!(
        owner = %config.owner,
        repo = %config.repo,
        pr = ?pr_number,
        dry_run = cli.dry_run,
        "Starting triage run"
    );

    let engine = Engine::new(Arc::new(client)).with_dry_run(cli.dry_run);
    let outcome = engine.evaluate(pr_number).await?;

    // Print summary
    match &outcome {
        RunOutcome::Skipped {
            reason:
                SkipReason::DryRun {
                    would_add,
                    would_remove,
                },
        } => {
            println!("\n🔎 Dry Run Summary");
            println!("   Would add: {}", format_labels(would_add));
            println!("   Would remove: {}", format_labels(would_remove));
        }
        RunOutcome::Skipped { reason } => {
            println!("\n⏭️  Skipped: {reason}");
        }
        RunOutcome::Applied { added, removed } => {
            println!("\n🏷️  Triage Summary");
            println!("   Added: {}", format_labels(added));
            println!("   Removed: {}", format_labels(removed));
        }
    }

    Ok(())
}

fn format_labels(labels: &BTreeSet<String>) -> String {
    if labels.is_empty() {
        "(none)".to_string()
    } else {
        labels.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
