use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pipeshare() -> Command {
    let mut cmd = Command::cargo_bin("pipeshare").unwrap();
    cmd.env_clear().env("PIPESHARE_MAX_ATTEMPTS", "1");
    cmd
}

#[test]
fn test_missing_inputs_fail() {
    pipeshare()
        .env("app_url", "https://app.bitrise.io")
        .env("build_slug", "slug")
        .env("build_api_token", "token")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to process Step inputs"))
        .stderr(predicate::str::contains("required input 'variables' is not set"));
}

#[test]
fn test_malformed_variables_fail_before_sharing() {
    pipeshare()
        .env("variables", "=value")
        .env("app_url", "https://app.bitrise.io")
        .env("build_slug", "slug")
        .env("build_api_token", "token")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "env var should be in a format: KEY=value or KEY: =value",
        ));
}

#[test]
fn test_token_is_not_logged() {
    pipeshare()
        .env("variables", "=value")
        .env("app_url", "https://app.bitrise.io")
        .env("build_slug", "slug")
        .env("build_api_token", "very-secret-token")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("very-secret-token").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shares_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pipeline/workflow_builds/slug/env_vars"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        pipeshare()
            .env("variables", "A=1")
            .env("app_url", uri)
            .env("build_slug", "slug")
            .env("build_api_token", "token")
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Sharing 1 env vars"), "stderr: {stderr}");
    assert!(stderr.contains("Finished"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_failure_exits_with_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error_msg":"some error"}"#))
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        pipeshare()
            .args(["--variables", "A=1", "--build-slug", "slug"])
            .env("app_url", uri)
            .env("build_api_token", "token")
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to execute Step"), "stderr: {stderr}");
    assert!(stderr.contains("(400), message: some error"), "stderr: {stderr}");
}

async fn failing_server(status: u16, expected_requests: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pipeline/workflow_builds/slug/env_vars"))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_requests)
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_max_attempts_flag_limits_requests() {
    let server = failing_server(503, 3).await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        pipeshare()
            .args(["--max-attempts", "3"])
            .env("variables", "A=1")
            .env("app_url", uri)
            .env("build_slug", "slug")
            .env("build_api_token", "token")
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Attempt 2/3 failed"), "stderr: {stderr}");
    assert!(stderr.contains("(503)"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_max_attempts_from_environment() {
    let server = failing_server(500, 2).await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        pipeshare()
            .env("PIPESHARE_MAX_ATTEMPTS", "2")
            .env("variables", "A=1")
            .env("app_url", uri)
            .env("build_slug", "slug")
            .env("build_api_token", "token")
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_timeout_flag_bounds_each_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204).set_delay(std::time::Duration::from_secs(10)))
        .mount(&server)
        .await;

    let uri = server.uri();
    let started = std::time::Instant::now();
    let output = tokio::task::spawn_blocking(move || {
        pipeshare()
            .args(["--timeout-secs", "1"])
            .env("variables", "A=1")
            .env("app_url", uri)
            .env("build_slug", "slug")
            .env("build_api_token", "token")
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(started.elapsed() < std::time::Duration::from_secs(8));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("network error"), "stderr: {stderr}");
}
