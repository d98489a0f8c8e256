//! Immutable view of a pull request at evaluation time.

use std::collections::BTreeSet;

use crate::file::ChangedFile;
use crate::label::Label;
use crate::policy::{self, TriagePolicy};
use crate::review;
use crate::rules;

/// Everything one triage evaluation needs to know about a pull request.
///
/// Assembled once per run from the hosting platform's answers and never
/// mutated; the next run takes a fresh snapshot.
#[derive(Debug, Clone)]
pub struct PullRequestSnapshot {
    pub number: u64,
    pub is_draft: bool,
    pub changed_files: Vec<ChangedFile>,
    /// Wire names of labels currently on the PR, deduplicated.
    pub current_labels: BTreeSet<String>,
    /// Requested reviewer identities as reported, duplicates included.
    pub requested_reviewers: Vec<String>,
}

impl PullRequestSnapshot {
    /// Distinct requested reviewer identities.
    #[must_use]
    pub fn reviewer_count(&self) -> usize {
        review::unique_reviewers(&self.requested_reviewers).len()
    }

    /// Labels this pull request should carry under `policy`.
    #[must_use]
    pub fn desired_labels(&self, policy: &TriagePolicy) -> BTreeSet<Label> {
        let mut desired: BTreeSet<Label> = self
            .changed_files
            .iter()
            .filter_map(rules::classify)
            .collect();

        if let Some(label) = policy::detect_mass_change(&self.changed_files, policy) {
            desired.insert(label);
        }
        if let Some(label) = review::review_needed(&self.requested_reviewers) {
            desired.insert(label);
        }

        desired
    }

    /// Current labels restricted to the managed vocabulary.
    ///
    /// Maintainers attach labels this tool knows nothing about; those are
    /// invisible to reconciliation.
    #[must_use]
    pub fn managed_labels(&self) -> BTreeSet<Label> {
        self.current_labels
            .iter()
            .filter_map(|name| Label::from_name(name))
            .collect()
    }
}
