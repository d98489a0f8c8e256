//! Label-set reconciliation.

use std::collections::BTreeSet;

use crate::label::Label;

/// The mutations that bring a pull request's labels to the desired state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationPlan {
    pub to_add: BTreeSet<Label>,
    pub to_remove: BTreeSet<Label>,
}

impl ReconciliationPlan {
    /// Whether the plan requires no mutations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Diff desired labels against the pull request's current set.
///
/// Additions are the plain set difference. Removal is deliberately narrow:
/// only the `waiting` marker is ever taken off, so labels applied by hand
/// stay untouched however stale they look. Applying the plan and running
/// the diff again yields an empty plan.
#[must_use]
pub fn reconcile(desired: &BTreeSet<Label>, current: &BTreeSet<Label>) -> ReconciliationPlan {
    let to_add = desired.difference(current).copied().collect();

    let mut to_remove = BTreeSet::new();
    if current.contains(&Label::Waiting) && !desired.contains(&Label::Waiting) {
        to_remove.insert(Label::Waiting);
    }

    ReconciliationPlan { to_add, to_remove }
}
