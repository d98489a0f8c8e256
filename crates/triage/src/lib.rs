//! Triage orchestration for pull request labeling.
//!
//! Wires the pure classification core to the GitHub collaborator:
//! - `config`: environment and repository resolution
//! - `gateway`: the pull request access seam
//! - `engine`: the evaluate-and-apply run loop

pub mod config;
pub mod engine;
pub mod error;
pub mod gateway;

pub use config::Config;
pub use engine::{Engine, RunOutcome, SkipReason};
pub use error::TriageError;
pub use gateway::PullRequestGateway;
