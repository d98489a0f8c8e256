//! The triage run loop.
//!
//! One evaluation per invocation: snapshot the pull request, compute the
//! label plan with the pure core, then apply it through the gateway.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use futures::future::join_all;
use labeler::reconcile::reconcile;
use labeler::{PullRequestSnapshot, TriagePolicy};
use tracing::{info, instrument};

use crate::error::TriageError;
use crate::gateway::PullRequestGateway;

/// Why a run finished without touching any label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The triggering event carried no pull request number.
    MissingPrNumber,
    /// The pull request is still a draft.
    Draft,
    /// Dry-run mode: the plan was computed but not applied.
    DryRun {
        would_add: BTreeSet<String>,
        would_remove: BTreeSet<String>,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrNumber => write!(f, "no pull request number in the triggering event"),
            Self::Draft => write!(f, "pull request is a draft"),
            Self::DryRun { .. } => write!(f, "dry run"),
        }
    }
}

/// Result of a completed triage run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run ended before any mutation.
    Skipped { reason: SkipReason },
    /// The plan was applied. Both sets are empty when the pull request
    /// was already converged.
    Applied {
        added: BTreeSet<String>,
        removed: BTreeSet<String>,
    },
}

/// Orchestrates one triage run over a single pull request.
pub struct Engine {
    gateway: Arc<dyn PullRequestGateway>,
    policy: TriagePolicy,
    dry_run: bool,
}

impl Engine {
    pub fn new(gateway: Arc<dyn PullRequestGateway>) -> Self {
        Self {
            gateway,
            policy: TriagePolicy::default(),
            dry_run: false,
        }
    }

    /// Override the mass-change thresholds.
    #[must_use]
    pub fn with_policy(mut self, policy: TriagePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Compute plans without applying them.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run triage for the resolved pull request, if any.
    ///
    /// Queries abort the run on first failure, before any label is
    /// touched. Mutations are all attempted before the first failure
    /// propagates, so one bad call cannot strand the rest of the plan.
    #[instrument(skip(self))]
    pub async fn evaluate(&self, pr_number: Option<u64>) -> Result<RunOutcome, TriageError> {
        let Some(pr_number) = pr_number else {
            info!("no pull request number resolved, nothing to triage");
            return Ok(RunOutcome::Skipped {
                reason: SkipReason::MissingPrNumber,
            });
        };

        let pull_request = self
            .gateway
            .get_pull_request(pr_number)
            .await
            .map_err(|source| TriageError::Query { pr_number, source })?;

        if pull_request.is_draft {
            info!(pr_number, "draft pull request, leaving labels untouched");
            return Ok(RunOutcome::Skipped {
                reason: SkipReason::Draft,
            });
        }

        let changed_files = self
            .gateway
            .list_changed_files(pr_number)
            .await
            .map_err(|source| TriageError::Query { pr_number, source })?;

        let requested_reviewers = self
            .gateway
            .list_requested_reviewers(pr_number)
            .await
            .map_err(|source| TriageError::Query { pr_number, source })?;

        let snapshot = PullRequestSnapshot {
            number: pull_request.number,
            is_draft: pull_request.is_draft,
            changed_files,
            current_labels: pull_request.labels,
            requested_reviewers,
        };

        let desired = snapshot.desired_labels(&self.policy);
        let current = snapshot.managed_labels();
        let plan = reconcile(&desired, &current);

        let to_add: BTreeSet<String> = plan
            .to_add
            .iter()
            .map(|label| label.name().to_string())
            .collect();
        let to_remove: BTreeSet<String> = plan
            .to_remove
            .iter()
            .map(|label| label.name().to_string())
            .collect();

        info!(
            pr_number,
            files = snapshot.changed_files.len(),
            reviewers = snapshot.reviewer_count(),
            add = ?to_add,
            remove = ?to_remove,
            "computed label plan"
        );

        if self.dry_run {
            return Ok(RunOutcome::Skipped {
                reason: SkipReason::DryRun {
                    would_add: to_add,
                    would_remove: to_remove,
                },
            });
        }

        self.apply(pr_number, &to_add, &to_remove).await?;

        Ok(RunOutcome::Applied {
            added: to_add,
            removed: to_remove,
        })
    }

    /// Apply the plan: one batched add, then every removal concurrently.
    async fn apply(
        &self,
        pr_number: u64,
        to_add: &BTreeSet<String>,
        to_remove: &BTreeSet<String>,
    ) -> Result<(), TriageError> {
        let add_result = if to_add.is_empty() {
            Ok(())
        } else {
            let labels: Vec<String> = to_add.iter().cloned().collect();
            self.gateway.add_labels(pr_number, &labels).await
        };

        let removals = join_all(
            to_remove
                .iter()
                .map(|label| self.gateway.remove_label(pr_number, label)),
        )
        .await;

        add_result.map_err(|source| TriageError::Mutation { pr_number, source })?;
        for result in removals {
            result.map_err(|source| TriageError::Mutation { pr_number, source })?;
        }

        Ok(())
    }
}
