//! Reviewer-presence check.

use std::collections::BTreeSet;

use crate::label::Label;

/// Deduplicate reviewer identities.
///
/// The same identity can arrive more than once when user and team
/// expansions overlap.
#[must_use]
pub fn unique_reviewers(reviewers: &[String]) -> BTreeSet<&str> {
    reviewers.iter().map(String::as_str).collect()
}

/// Flag a pull request with nobody assigned to review it.
#[must_use]
pub fn review_needed(reviewers: &[String]) -> Option<Label> {
    if unique_reviewers(reviewers).is_empty() {
        Some(Label::ReviewNeeded)
    } else {
        None
    }
}
