//! Error types for triage runs.

use github::GitHubError;
use thiserror::Error;

/// Errors surfaced by configuration resolution and triage runs.
///
/// Read failures abort a run before any label is touched; mutation
/// failures are reported after every planned mutation has been
/// attempted. Both keep the PR number so operators can tell which
/// pull request a failed run belongs to.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("upstream query for PR #{pr_number} failed: {source}")]
    Query {
        pr_number: u64,
        #[source]
        source: GitHubError,
    },

    #[error("label mutation on PR #{pr_number} failed: {source}")]
    Mutation {
        pr_number: u64,
        #[source]
        source: GitHubError,
    },

    #[error("GITHUB_TOKEN (or GH_TOKEN) is not set")]
    MissingToken,

    #[error("invalid repository '{repo}': expected owner/name")]
    InvalidRepo { repo: String },
}
