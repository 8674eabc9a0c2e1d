use std::path::PathBuf;

use gitlair::{BumpTracker, FetchError, GitHubApi, ReportStatus, Settings};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/pulls")
        .join(name);
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

async fn mount_rate_limit(server: &MockServer, remaining: i64) {
    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": { "core": { "limit": 5000, "remaining": remaining, "reset": 1700000000 } }
        })))
        .mount(server)
        .await;
}

fn settings(server: &MockServer, repositories: &[&str]) -> Settings {
    Settings::new("octo-org")
        .with_api_base(server.uri())
        .with_repositories(repositories.iter().map(|r| r.to_string()).collect())
}

#[tokio::test]
async fn reports_bumps_from_every_repository() {
    let server = MockServer::start().await;
    mount_rate_limit(&server, 5000).await;
    Mock::given(method("GET"))
        .and(path("/repos/octo-org/r1/pulls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("mixed.json")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo-org/r2/pulls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let tracker = BumpTracker::new(settings(&server, &["r1", "r2"]), Some("test-token")).unwrap();
    let report = tracker.run().await.unwrap();

    assert_eq!(report.bumps.len(), 3);
    assert_eq!(report.repositories_checked, 2);
    assert_eq!(report.status(), ReportStatus::Warning);
    assert!(!report.has_failures());
}

#[tokio::test]
async fn exhausted_rate_limit_issues_no_data_requests() {
    let server = MockServer::start().await;
    mount_rate_limit(&server, 0).await;
    Mock::given(method("GET"))
        .and(path("/repos/octo-org/r1/pulls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("mixed.json")))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo-org/r2/pulls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let tracker = BumpTracker::new(settings(&server, &["r1", "r2"]), None).unwrap();
    let report = tracker.run().await.unwrap();

    assert!(report.bumps.is_empty());
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.status(), ReportStatus::Success);
}

#[tokio::test]
async fn client_checks_rate_limit_before_each_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": { "core": { "remaining": 3 } }
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo-org/r1/pulls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let api = GitHubApi::new(&server.uri(), None).unwrap();
    for _ in 0..2 {
        let pulls = api.fetch_pulls("octo-org", "r1").await.unwrap();
        assert!(pulls.is_empty());
    }
}

#[tokio::test]
async fn rate_limit_error_is_reported() {
    let server = MockServer::start().await;
    mount_rate_limit(&server, 0).await;

    let api = GitHubApi::new(&server.uri(), None).unwrap();
    let info = api.check_rate_limit().await.unwrap();
    assert_eq!(info.remaining, 0);
    assert_eq!(info.limit, Some(5000));

    let error = api.fetch_pulls("octo-org", "r1").await.unwrap_err();
    assert!(matches!(error, FetchError::RateLimitExceeded { remaining: 0 }));
}
