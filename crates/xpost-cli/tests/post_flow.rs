//! CLI tests for the interactive post flow against a mock platform.

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{approve, endpoint_args, query_param, run_cli, run_interactive};

fn post_args(server: &MockServer, extra: &[&str]) -> Vec<String> {
    let mut args: Vec<String> = ["post", "--client-id", "client-abc", "--client-secret", "secret"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    args.extend(endpoint_args(server));
    args.extend(extra.iter().map(|s| s.to_string()));
    args
}

async fn mount_token_endpoint(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/2/oauth2/token"))
        .and(body_string_contains("code=code-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "bearer",
            "expires_in": 7200,
            "access_token": "access-123",
            "scope": "tweet.read tweet.write users.read"
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_post_endpoint(server: &MockServer, text: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .and(header("authorization", "Bearer access-123"))
        .and(body_json(json!({ "text": text })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": "1445880548472328192", "text": text }
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_post_flow_end_to_end() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;
    mount_post_endpoint(&server, "hi", 1).await;

    let args = post_args(&server, &[]);
    let session = tokio::task::spawn_blocking(move || {
        run_interactive(&args, |url| Some(approve(url, "code-123")))
    })
    .await
    .unwrap();

    assert!(
        session.status.success(),
        "Post flow failed: {}",
        session.stderr
    );
    assert!(session.stdout.contains("Please visit this URL to authorize the application:"));
    assert!(session.stdout.contains("Post created successfully"));
    assert!(session.stdout.contains("1445880548472328192"));
    assert!(session.stdout.contains("https://twitter.com/i/status/1445880548472328192"));

    let url = &session.authorization_url;
    assert_eq!(url.path(), "/i/oauth2/authorize");
    assert_eq!(query_param(url, "client_id").as_deref(), Some("client-abc"));
    assert_eq!(
        query_param(url, "redirect_uri").as_deref(),
        Some("https://localhost")
    );
    assert_eq!(
        query_param(url, "scope").as_deref(),
        Some("tweet.read tweet.write users.read")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_post_flow_custom_text_as_json() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;
    mount_post_endpoint(&server, "hello from xpost", 1).await;

    let args = post_args(&server, &["--text", "hello from xpost", "--json"]);
    let session = tokio::task::spawn_blocking(move || {
        run_interactive(&args, |url| Some(approve(url, "code-123")))
    })
    .await
    .unwrap();

    assert!(session.status.success(), "Post flow failed: {}", session.stderr);

    let last = session
        .stdout
        .lines()
        .rev()
        .find(|l| l.starts_with('{'))
        .expect("no JSON output");
    let post: serde_json::Value = serde_json::from_str(last).unwrap();
    assert_eq!(post["id"], "1445880548472328192");
    assert_eq!(post["text"], "hello from xpost");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_custom_scopes_reach_authorization_url() {
    let server = MockServer::start().await;

    let args = post_args(&server, &["--scope", "tweet.write", "--scope", "offline.access"]);
    let session = tokio::task::spawn_blocking(move || run_interactive(&args, |_| None))
        .await
        .unwrap();

    assert_eq!(
        query_param(&session.authorization_url, "scope").as_deref(),
        Some("tweet.write offline.access")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_forged_state_is_rejected() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 0).await;
    mount_post_endpoint(&server, "hi", 0).await;

    let args = post_args(&server, &[]);
    let session = tokio::task::spawn_blocking(move || {
        run_interactive(&args, |_| {
            Some("https://localhost/?state=forged&code=code-123".to_string())
        })
    })
    .await
    .unwrap();

    assert!(!session.status.success());
    assert!(
        session.stderr.contains("state mismatch"),
        "Expected state mismatch error, got: {}",
        session.stderr
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_no_redirect_entered() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 0).await;

    let args = post_args(&server, &[]);
    let session = tokio::task::spawn_blocking(move || run_interactive(&args, |_| None))
        .await
        .unwrap();

    assert!(!session.status.success());
    assert!(session.stderr.contains("No redirect URL entered"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_client_prints_hint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2/oauth2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "unauthorized_client",
            "error_description": "Missing valid authorization header"
        })))
        .mount(&server)
        .await;

    let args = post_args(&server, &[]);
    let session = tokio::task::spawn_blocking(move || {
        run_interactive(&args, |url| Some(approve(url, "code-123")))
    })
    .await
    .unwrap();

    assert!(!session.status.success());
    assert!(session.stderr.contains("check the client id and secret"));
    assert!(session.stderr.contains("Failed to fetch access token"));
}

#[tokio::test]
async fn test_blank_text_fails_before_authorization() {
    let server = MockServer::start().await;

    let output = run_cli(&post_args(&server, &["--text", "   "]));

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("Please visit"));
    assert!(stderr.contains("Invalid post text"), "got: {stderr}");
}

#[test]
fn test_missing_client_id() {
    let output = run_cli(&["post".to_string()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--client-id"), "got: {stderr}");
}

#[test]
fn test_version_flag() {
    let output = run_cli(&["--version".to_string()]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("xpost "));
}
