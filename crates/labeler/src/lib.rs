//! Pure classification core for pull request triage.
//!
//! This crate provides:
//! - Path-based classification of changed files into triage labels
//! - Mass-change detection over a full changed-file set
//! - Review-state and label-reconciliation logic
//!
//! Everything here is deterministic and free of I/O; fetching pull request
//! state and applying label mutations belong to the `github` and `triage`
//! crates.

pub mod file;
pub mod label;
pub mod policy;
pub mod reconcile;
pub mod review;
pub mod rules;
pub mod snapshot;

// Re-export main types
pub use file::{ChangedFile, FileStatus};
pub use label::Label;
pub use policy::TriagePolicy;
pub use reconcile::ReconciliationPlan;
pub use snapshot::PullRequestSnapshot;
