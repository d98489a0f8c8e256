//! # GitHub REST Client
//!
//! Typed client for the pull request endpoints triage consumes, with
//! pagination for the changed-file listing and rate-limit tracking from
//! response headers.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use labeler::{ChangedFile, FileStatus};
use reqwest::{header, Client as HttpClient, Method, Response};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::error::GitHubError;

const GITHUB_API_URL: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("pr-triage/", env!("CARGO_PKG_VERSION"));

/// Page size for the changed-file listing; the API caps it at 100.
const FILES_PER_PAGE: usize = 100;

/// Pull request metadata relevant to triage.
#[derive(Debug, Clone)]
pub struct PullRequestInfo {
    pub number: u64,
    pub is_draft: bool,
    /// Wire names of the labels currently on the PR, deduplicated.
    pub labels: BTreeSet<String>,
}

/// GitHub API client scoped to a single repository.
pub struct GitHubClient {
    http_client: HttpClient,
    base_url: String,
    token: String,
    owner: String,
    repo: String,
    rate_limit: Mutex<RateLimitState>,
}

#[derive(Debug)]
struct RateLimitState {
    remaining: i64,
    reset: Option<Instant>,
}

#[derive(Debug, Deserialize)]
struct RawPullRequest {
    number: u64,
    #[serde(default)]
    draft: bool,
    #[serde(default)]
    labels: Vec<RawLabel>,
}

#[derive(Debug, Deserialize)]
struct RawLabel {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawChangedFile {
    filename: String,
    previous_filename: Option<String>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct RawRequestedReviewers {
    #[serde(default)]
    users: Vec<RawUser>,
    #[serde(default)]
    teams: Vec<RawTeam>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct RawTeam {
    slug: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GitHubClient {
    /// Create a client for `owner/repo` authenticated with `token`.
    pub fn new(token: String, owner: String, repo: String) -> Result<Self, GitHubError> {
        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            base_url: GITHUB_API_URL.to_string(),
            token,
            owner,
            repo,
            rate_limit: Mutex::new(RateLimitState {
                remaining: 5000, // GitHub's default hourly quota
                reset: None,
            }),
        })
    }

    /// Point the client at a different API root (GHES, test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch pull request metadata: draft status and current labels.
    #[instrument(skip(self), fields(pr_number = %pr_number))]
    pub async fn get_pull_request(&self, pr_number: u64) -> Result<PullRequestInfo, GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/pulls/{}",
            self.base_url, self.owner, self.repo, pr_number
        );

        let response = self.make_request(Method::GET, &url, None).await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let raw: RawPullRequest = response.json().await?;
        let labels: BTreeSet<String> = raw.labels.into_iter().map(|label| label.name).collect();

        debug!(
            draft = raw.draft,
            label_count = labels.len(),
            "Fetched pull request metadata"
        );
        Ok(PullRequestInfo {
            number: raw.number,
            is_draft: raw.draft,
            labels,
        })
    }

    /// List every file changed by a PR, following pagination.
    #[instrument(skip(self), fields(pr_number = %pr_number))]
    pub async fn list_changed_files(
        &self,
        pr_number: u64,
    ) -> Result<Vec<ChangedFile>, GitHubError> {
        let mut files = Vec::new();
        let mut page = 1;

        loop {
            let url = format!(
                "{}/repos/{}/{}/pulls/{}/files?per_page={}&page={}",
                self.base_url, self.owner, self.repo, pr_number, FILES_PER_PAGE, page
            );

            let response = self.make_request(Method::GET, &url, None).await?;
            if !response.status().is_success() {
                return Err(Self::error_for(response).await);
            }

            let batch: Vec<RawChangedFile> = response.json().await?;
            let batch_len = batch.len();
            files.extend(batch.into_iter().filter_map(into_changed_file));

            if batch_len < FILES_PER_PAGE {
                break;
            }
            page += 1;
        }

        debug!("Retrieved {} changed files for PR #{}", files.len(), pr_number);
        Ok(files)
    }

    /// List requested reviewers: user logins plus team slugs.
    #[instrument(skip(self), fields(pr_number = %pr_number))]
    pub async fn list_requested_reviewers(
        &self,
        pr_number: u64,
    ) -> Result<Vec<String>, GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/pulls/{}/requested_reviewers",
            self.base_url, self.owner, self.repo, pr_number
        );

        let response = self.make_request(Method::GET, &url, None).await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let raw: RawRequestedReviewers = response.json().await?;
        let reviewers: Vec<String> = raw
            .users
            .into_iter()
            .map(|user| user.login)
            .chain(raw.teams.into_iter().map(|team| team.slug))
            .collect();

        debug!(
            "Retrieved {} requested reviewers for PR #{}",
            reviewers.len(),
            pr_number
        );
        Ok(reviewers)
    }

    /// Add labels to a PR in one batched call.
    #[instrument(skip(self), fields(pr_number = %pr_number, labels = ?labels))]
    pub async fn add_labels(&self, pr_number: u64, labels: &[String]) -> Result<(), GitHubError> {
        if labels.is_empty() {
            return Ok(());
        }

        let url = format!(
            "{}/repos/{}/{}/issues/{}/labels",
            self.base_url, self.owner, self.repo, pr_number
        );

        let body = serde_json::json!({ "labels": labels });
        let response = self.make_request(Method::POST, &url, Some(body)).await?;

        if response.status().is_success() {
            info!("Added {} labels to PR #{}", labels.len(), pr_number);
            Ok(())
        } else {
            Err(Self::error_for(response).await)
        }
    }

    /// Remove a single label from a PR.
    ///
    /// A 404 means the label is already gone, which is success as far as
    /// reconciliation is concerned.
    #[instrument(skip(self), fields(pr_number = %pr_number, label = %label))]
    pub async fn remove_label(&self, pr_number: u64, label: &str) -> Result<(), GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/labels/{}",
            self.base_url,
            self.owner,
            self.repo,
            pr_number,
            urlencoding::encode(label)
        );

        let response = self.make_request(Method::DELETE, &url, None).await?;

        match response.status().as_u16() {
            200..=299 => {
                debug!("Removed label '{}' from PR #{}", label, pr_number);
                Ok(())
            }
            404 => {
                debug!(
                    "Label '{}' not found on PR #{} (already removed)",
                    label, pr_number
                );
                Ok(())
            }
            _ => Err(Self::error_for(response).await),
        }
    }

    /// Make an HTTP request with rate-limit bookkeeping.
    async fn make_request(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, GitHubError> {
        self.check_rate_limit().await?;

        let mut request = self
            .http_client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION);

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        self.update_rate_limit(&response).await;

        if response.status().as_u16() == 403 {
            if let Some(reset_in) = Self::quota_rejection(&response) {
                return Err(GitHubError::RateLimited { reset_in });
            }
        }

        Ok(response)
    }

    /// Refuse to issue a request once the tracked quota is spent.
    async fn check_rate_limit(&self) -> Result<(), GitHubError> {
        let state = self.rate_limit.lock().await;
        if state.remaining > 0 {
            return Ok(());
        }

        let reset_in = state.reset.map_or(
            Duration::from_secs(60), // Conservative fallback
            |reset| reset.saturating_duration_since(Instant::now()),
        );
        if reset_in > Duration::ZERO {
            return Err(GitHubError::RateLimited { reset_in });
        }
        Ok(())
    }

    /// Update rate-limit tracking from response headers.
    async fn update_rate_limit(&self, response: &Response) {
        let remaining = Self::header_i64(response, "x-ratelimit-remaining");
        let reset = Self::header_i64(response, "x-ratelimit-reset");

        let mut state = self.rate_limit.lock().await;
        if let Some(remaining) = remaining {
            state.remaining = remaining;
        }
        if let Some(reset) = reset {
            let now = chrono::Utc::now().timestamp();
            #[allow(clippy::cast_sign_loss)]
            let seconds_until_reset = (reset - now).max(0) as u64;
            state.reset = Some(Instant::now() + Duration::from_secs(seconds_until_reset));
        }
    }

    /// A 403 is a rate-limit rejection only when the quota header reads zero.
    fn quota_rejection(response: &Response) -> Option<Duration> {
        let remaining = Self::header_i64(response, "x-ratelimit-remaining")?;
        if remaining > 0 {
            return None;
        }

        let reset_in = Self::header_i64(response, "x-ratelimit-reset").map_or(
            Duration::from_secs(60),
            |reset| {
                let now = chrono::Utc::now().timestamp();
                #[allow(clippy::cast_sign_loss)]
                let seconds_until_reset = (reset - now).max(0) as u64;
                Duration::from_secs(seconds_until_reset)
            },
        );
        Some(reset_in)
    }

    fn header_i64(response: &Response, name: &str) -> Option<i64> {
        response
            .headers()
            .get(name)?
            .to_str()
            .ok()?
            .parse()
            .ok()
    }

    /// Convert a non-success response into an error, draining the body.
    async fn error_for(response: Response) -> GitHubError {
        let status = response.status().as_u16();
        if status == 401 {
            return GitHubError::AuthenticationFailed;
        }

        match response.json::<ApiErrorBody>().await {
            Ok(body) => GitHubError::Api {
                status,
                message: body.message,
            },
            Err(err) => GitHubError::Http(err),
        }
    }
}

/// Convert a wire file entry into the domain descriptor.
///
/// Files with a status outside the known set are skipped rather than
/// failing the whole listing. The previous path survives only for
/// renames, so downstream predicates never see a stale one.
fn into_changed_file(raw: RawChangedFile) -> Option<ChangedFile> {
    let Some(status) = FileStatus::from_wire(&raw.status) else {
        warn!(
            filename = %raw.filename,
            status = %raw.status,
            "Skipping file with unknown status"
        );
        return None;
    };

    let previous_filename = if status == FileStatus::Renamed {
        raw.previous_filename
    } else {
        None
    };

    Some(ChangedFile {
        filename: raw.filename,
        previous_filename,
        status,
    })
}
