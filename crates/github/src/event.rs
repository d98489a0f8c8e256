//! Actions event payload parsing.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Minimal shape of a webhook payload that references a pull request.
#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestRef>,
    /// Issue-shaped events carry the number at the top level.
    number: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct PullRequestRef {
    number: u64,
}

/// Extract the pull request number from an Actions event payload file.
///
/// Returns `None` when the file is missing, unreadable, or describes an
/// event with no pull request attached. Triggering on such an event is a
/// skip, not an error.
#[must_use]
pub fn pr_number_from_event(path: &Path) -> Option<u64> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Could not read event payload");
            return None;
        }
    };

    let payload: EventPayload = match serde_json::from_str(&raw) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Could not parse event payload");
            return None;
        }
    };

    let number = payload
        .pull_request
        .map(|pull_request| pull_request.number)
        .or(payload.number);
    if let Some(number) = number {
        debug!(pr_number = number, "Resolved PR number from event payload");
    }
    number
}
