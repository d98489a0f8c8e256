//! Pull request access seam.
//!
//! The engine talks to GitHub through this trait so runs can be
//! exercised against an in-memory double.

use async_trait::async_trait;
use github::{GitHubClient, GitHubError, PullRequestInfo};
use labeler::ChangedFile;

/// Read and mutate operations the triage engine needs on a pull request.
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch PR metadata: draft state and currently applied labels.
    async fn get_pull_request(&self, pr_number: u64) -> Result<PullRequestInfo, GitHubError>;

    /// List every file changed by the PR.
    async fn list_changed_files(&self, pr_number: u64) -> Result<Vec<ChangedFile>, GitHubError>;

    /// List pending review requests (user logins and team slugs).
    async fn list_requested_reviewers(&self, pr_number: u64) -> Result<Vec<String>, GitHubError>;

    /// Attach labels to the PR in one batched call.
    async fn add_labels(&self, pr_number: u64, labels: &[String]) -> Result<(), GitHubError>;

    /// Detach a single label from the PR.
    async fn remove_label(&self, pr_number: u64, label: &str) -> Result<(), GitHubError>;
}

#[async_trait]
impl PullRequestGateway for GitHubClient {
    async fn get_pull_request(&self, pr_number: u64) -> Result<PullRequestInfo, GitHubError> {
        GitHubClient::get_pull_request(self, pr_number).await
    }

    async fn list_changed_files(&self, pr_number: u64) -> Result<Vec<ChangedFile>, GitHubError> {
        GitHubClient::list_changed_files(self, pr_number).await
    }

    async fn list_requested_reviewers(&self, pr_number: u64) -> Result<Vec<String>, GitHubError> {
        GitHubClient::list_requested_reviewers(self, pr_number).await
    }

    async fn add_labels(&self, pr_number: u64, labels: &[String]) -> Result<(), GitHubError> {
        GitHubClient::add_labels(self, pr_number, labels).await
    }

    async fn remove_label(&self, pr_number: u64, label: &str) -> Result<(), GitHubError> {
        GitHubClient::remove_label(self, pr_number, label).await
    }
}
