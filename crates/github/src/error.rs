//! Error types for GitHub API operations.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limit exceeded, reset in {reset_in:?}")]
    RateLimited { reset_in: Duration },

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
