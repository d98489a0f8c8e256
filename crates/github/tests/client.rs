//! Integration tests for the GitHub client against a mock server.

use github::{GitHubClient, GitHubError};
use labeler::ChangedFile;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::new(
        "test-token".to_string(),
        "5dlabs".to_string(),
        "docs".to_string(),
    )
    .expect("client builds")
    .with_base_url(server.uri())
}

#[tokio::test]
async fn test_get_pull_request_parses_draft_and_labels() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/5dlabs/docs/pulls/42"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": 42,
            "draft": true,
            "labels": [{"name": "waiting"}, {"name": "page edit"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let info = client.get_pull_request(42).await.expect("request succeeds");

    assert_eq!(info.number, 42);
    assert!(info.is_draft);
    assert!(info.labels.contains("waiting"));
    assert!(info.labels.contains("page edit"));
}

#[tokio::test]
async fn test_get_pull_request_defaults_missing_draft_flag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/5dlabs/docs/pulls/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": 3,
            "labels": [],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let info = client.get_pull_request(3).await.expect("request succeeds");

    assert!(!info.is_draft);
    assert!(info.labels.is_empty());
}

#[tokio::test]
async fn test_list_changed_files_follows_pagination() {
    let server = MockServer::start().await;

    let first_page: Vec<serde_json::Value> = (0..100)
        .map(|i| json!({"filename": format!("pages/common/cmd-{i}.md"), "status": "modified"}))
        .collect();
    let second_page = vec![json!({
        "filename": "pages/common/ls.md",
        "previous_filename": "pages/linux/ls.md",
        "status": "renamed",
    })];

    Mock::given(method("GET"))
        .and(path("/repos/5dlabs/docs/pulls/7/files"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&first_page))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/5dlabs/docs/pulls/7/files"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&second_page))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let files = client.list_changed_files(7).await.expect("request succeeds");

    assert_eq!(files.len(), 101);
    assert_eq!(
        files.last(),
        Some(&ChangedFile::renamed(
            "pages/linux/ls.md",
            "pages/common/ls.md"
        ))
    );
}

#[tokio::test]
async fn test_list_changed_files_skips_unknown_statuses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/5dlabs/docs/pulls/8/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"filename": "pages/common/cat.md", "status": "added"},
            {"filename": "README.md", "status": "vanished"},
            {"filename": "scripts/test.sh", "status": "modified"},
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let files = client.list_changed_files(8).await.expect("request succeeds");

    assert_eq!(files.len(), 2);
}

#[tokio::test]
async fn test_list_requested_reviewers_merges_users_and_teams() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/5dlabs/docs/pulls/9/requested_reviewers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{"login": "alice"}, {"login": "bob"}],
            "teams": [{"slug": "maintainers"}],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reviewers = client
        .list_requested_reviewers(9)
        .await
        .expect("request succeeds");

    assert_eq!(
        reviewers,
        vec![
            "alice".to_string(),
            "bob".to_string(),
            "maintainers".to_string()
        ]
    );
}

#[tokio::test]
async fn test_add_labels_posts_one_batched_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/5dlabs/docs/issues/7/labels"))
        .and(body_json(json!({"labels": ["new command", "review needed"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .add_labels(
            7,
            &["new command".to_string(), "review needed".to_string()],
        )
        .await
        .expect("request succeeds");
}

#[tokio::test]
async fn test_add_labels_with_empty_set_issues_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.add_labels(7, &[]).await.expect("nothing to send");
}

#[tokio::test]
async fn test_remove_label_treats_missing_label_as_success() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/repos/5dlabs/docs/issues/7/labels/waiting"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Label does not exist"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .remove_label(7, "waiting")
        .await
        .expect("absent label is fine");
}

#[tokio::test]
async fn test_remove_label_url_encodes_the_name() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .remove_label(7, "new command")
        .await
        .expect("request succeeds");

    let requests = server.received_requests().await.expect("requests recorded");
    assert!(requests
        .iter()
        .any(|request| request.url.path().ends_with("/labels/new%20command")));
}

#[tokio::test]
async fn test_api_errors_carry_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/5dlabs/docs/issues/7/labels"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "Validation Failed"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .add_labels(7, &["tooling".to_string()])
        .await
        .expect_err("status propagates");

    match err {
        GitHubError::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Validation Failed");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/5dlabs/docs/pulls/1"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Bad credentials"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_pull_request(1).await.expect_err("auth error");

    assert!(matches!(err, GitHubError::AuthenticationFailed));
}

#[tokio::test]
async fn test_exhausted_quota_maps_to_rate_limited() {
    let server = MockServer::start().await;

    let reset = (chrono::Utc::now().timestamp() + 120).to_string();
    Mock::given(method("GET"))
        .and(path("/repos/5dlabs/docs/pulls/1"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("x-ratelimit-remaining", "0")
                .insert_header("x-ratelimit-reset", reset.as_str())
                .set_body_json(json!({"message": "API rate limit exceeded"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_pull_request(1).await.expect_err("quota spent");

    assert!(matches!(err, GitHubError::RateLimited { .. }));
}

#[tokio::test]
async fn test_spent_quota_blocks_the_next_request() {
    let server = MockServer::start().await;

    let reset = (chrono::Utc::now().timestamp() + 120).to_string();
    Mock::given(method("GET"))
        .and(path("/repos/5dlabs/docs/pulls/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-remaining", "0")
                .insert_header("x-ratelimit-reset", reset.as_str())
                .set_body_json(json!({"number": 1, "labels": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .get_pull_request(1)
        .await
        .expect("first request succeeds");

    // The tracked budget is now zero; the client must refuse to send.
    let err = client.get_pull_request(1).await.expect_err("quota is spent");
    assert!(matches!(err, GitHubError::RateLimited { .. }));

    let requests = server.received_requests().await.expect("requests recorded");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_plain_forbidden_is_not_a_rate_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/5dlabs/docs/pulls/1"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("x-ratelimit-remaining", "4800")
                .set_body_json(json!({"message": "Resource not accessible by integration"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_pull_request(1).await.expect_err("forbidden");

    match err {
        GitHubError::Api { status, .. } => assert_eq!(status, 403),
        other => panic!("unexpected error: {other}"),
    }
}
