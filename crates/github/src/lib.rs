//! GitHub REST collaborator for pull request triage.
//!
//! This crate provides:
//! - A typed client for the handful of REST endpoints triage consumes
//!   (pull request metadata, changed files, requested reviewers, label
//!   mutations) with pagination and rate-limit tracking
//! - Actions event payload parsing to resolve the triggering PR number
//!
//! Wire payloads are converted into `labeler` domain types at this
//! boundary; nothing above it sees raw JSON.

pub mod client;
pub mod error;
pub mod event;

pub use client::{GitHubClient, PullRequestInfo};
pub use error::GitHubError;
pub use event::pr_number_from_event;
