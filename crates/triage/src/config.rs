//! Runtime configuration for the triage CLI.

use std::env;
use std::path::PathBuf;

use crate::error::TriageError;

/// Resolved runtime configuration for a triage run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// API token used for every GitHub request.
    pub token: String,
    /// Alternate API root, for GHES deployments.
    pub api_url: Option<String>,
    /// Path to the Actions event payload, when running in a workflow.
    pub event_path: Option<PathBuf>,
}

impl Config {
    /// Resolve configuration from CLI arguments and the environment.
    ///
    /// The token comes from `GITHUB_TOKEN`, falling back to `GH_TOKEN`.
    /// `GITHUB_EVENT_PATH` is picked up when set so the PR number can be
    /// read from the triggering event.
    pub fn resolve(repo: &str, api_url: Option<String>) -> Result<Self, TriageError> {
        let (owner, name) = split_repo(repo)?;

        let token = env::var("GITHUB_TOKEN")
            .or_else(|_| env::var("GH_TOKEN"))
            .map_err(|_| TriageError::MissingToken)?;

        let event_path = env::var("GITHUB_EVENT_PATH").ok().map(PathBuf::from);

        Ok(Self {
            owner,
            repo: name,
            token,
            api_url,
            event_path,
        })
    }
}

/// Split an `owner/name` slug into its two halves.
fn split_repo(repo: &str) -> Result<(String, String), TriageError> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(TriageError::InvalidRepo {
            repo: repo.to_string(),
        }),
    }
}
