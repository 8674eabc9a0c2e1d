//! Octocrab-backed GitHub API client.

use crate::config::Settings;
use crate::github::rate_limit::RateLimitResponse;
use crate::github::{FetchError, PullRequest, RateLimitInfo, Repository};
use http::header::CONTENT_TYPE;
use http::Uri;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Thin client over the few GitHub endpoints the tracker needs.
///
/// Each call is a single attempt; retries built into the HTTP stack are
/// switched off.
#[derive(Clone)]
pub struct GitHubApi {
    octocrab: Octocrab,
}

impl GitHubApi {
    /// Builds a client for the given API base URL.
    ///
    /// Without a token the client runs unauthenticated, which works but has a
    /// much lower rate limit.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] when `api_base` is not a URI, or
    /// [`FetchError::Client`] when the client cannot be constructed.
    pub fn new(api_base: &str, token: Option<&str>) -> Result<Self, FetchError> {
        let base_uri: Uri = api_base
            .parse::<Uri>()
            .map_err(|e| FetchError::InvalidBaseUrl {
                url: api_base.to_string(),
                message: e.to_string(),
            })?;

        let mut builder = Octocrab::builder()
            .add_header(CONTENT_TYPE, "application/json".to_string())
            .add_retry_config(RetryConfig::None);
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }

        let octocrab = builder.base_uri(base_uri)?.build()?;
        Ok(Self { octocrab })
    }

    /// Builds a client from tracker settings.
    ///
    /// # Errors
    ///
    /// See [`GitHubApi::new`].
    pub fn from_settings(settings: &Settings, token: Option<&str>) -> Result<Self, FetchError> {
        Self::new(&settings.api_base, token)
    }

    /// Reads the core rate limit.
    ///
    /// # Errors
    ///
    /// Any transport, status or decoding failure is reported as
    /// [`FetchError::RateLimitUnavailable`].
    pub async fn check_rate_limit(&self) -> Result<RateLimitInfo, FetchError> {
        let response: RateLimitResponse = self
            .octocrab
            .get("/rate_limit", None::<&()>)
            .await
            .map_err(|e| FetchError::RateLimitUnavailable(e.to_string()))?;

        Ok(response.into())
    }

    /// Returns true if the core rate limit has requests left.
    ///
    /// A rate limit that cannot be read counts as exhausted.
    pub async fn rate_limit_ok(&self) -> bool {
        match self.check_rate_limit().await {
            Ok(info) => info.has_remaining(),
            Err(e) => {
                warn!(error = %e, "An error occurred while checking GitHub API rate limit");
                false
            }
        }
    }

    /// Lists the pull requests of `owner/repo`.
    ///
    /// # Errors
    ///
    /// Returns a rate limit error without touching the pulls endpoint when the
    /// quota is exhausted or unreadable, [`FetchError::Http`] for a non-success
    /// status and [`FetchError::Transport`] when no response arrived.
    pub async fn fetch_pulls(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequest>, FetchError> {
        self.request(&format!("/repos/{owner}/{repo}/pulls")).await
    }

    /// Lists the public repositories of a user.
    ///
    /// # Errors
    ///
    /// Same as [`GitHubApi::fetch_pulls`].
    pub async fn fetch_user_repos(&self, owner: &str) -> Result<Vec<Repository>, FetchError> {
        self.request(&format!("/users/{owner}/repos")).await
    }

    /// Issues a GET after confirming the rate limit allows it.
    async fn request<T: DeserializeOwned>(&self, route: &str) -> Result<T, FetchError> {
        let info = match self.check_rate_limit().await {
            Ok(info) => info,
            Err(e) => {
                warn!(route, error = %e, "An error occurred while checking GitHub API rate limit");
                return Err(e);
            }
        };

        if !info.has_remaining() {
            warn!(route, remaining = info.remaining, "GitHub API rate limit exceeded");
            return Err(FetchError::RateLimitExceeded {
                remaining: info.remaining,
            });
        }

        debug!(route, remaining = info.remaining, "Requesting");
        self.get_json(route).await.map_err(|error| {
            warn!(route, error = %error, "GitHub API request failed");
            error
        })
    }

    /// Issues one GET and decodes a success body.
    ///
    /// The status is checked before decoding, so error pages that are not
    /// GitHub's JSON still surface as [`FetchError::Http`].
    async fn get_json<T: DeserializeOwned>(&self, route: &str) -> Result<T, FetchError> {
        let uri = route
            .parse::<Uri>()
            .map_err(|e| FetchError::InvalidRoute {
                route: route.to_string(),
                message: e.to_string(),
            })?;

        let response = self
            .octocrab
            ._get(uri)
            .await
            .map_err(map_octocrab_error)?;
        let status = response.status();

        if !status.is_success() {
            let body = self
                .octocrab
                .body_to_string(response)
                .await
                .unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                message: extract_github_message(&body).unwrap_or_else(|| {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                }),
            });
        }

        let body = self
            .octocrab
            .body_to_string(response)
            .await
            .map_err(map_octocrab_error)?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            route: route.to_string(),
            source,
        })
    }
}

/// Reads the `message` field of a GitHub JSON error body.
fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

/// Sorts an octocrab error into the fetch error taxonomy.
fn map_octocrab_error(error: octocrab::Error) -> FetchError {
    if is_network_error(&error) {
        FetchError::Transport(error.to_string())
    } else {
        FetchError::Client(error)
    }
}

fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_rate_limit(server: &MockServer, remaining: i64) {
        Mock::given(method("GET"))
            .and(path("/rate_limit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resources": { "core": { "limit": 60, "remaining": remaining, "reset": 0 } }
            })))
            .mount(server)
            .await;
    }

    fn client(server: &MockServer) -> GitHubApi {
        GitHubApi::new(&server.uri(), None).unwrap()
    }

    #[tokio::test]
    async fn fetches_pulls_after_rate_check() {
        let server = MockServer::start().await;
        mount_rate_limit(&server, 10).await;
        Mock::given(method("GET"))
            .and(path("/repos/octo-org/web/pulls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "number": 3,
                    "title": "Bump lodash from 4.17.15 to 4.17.21",
                    "body": "Bumps lodash.",
                    "user": { "login": "dependabot[bot]" }
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let pulls = client(&server).fetch_pulls("octo-org", "web").await.unwrap();

        assert_eq!(pulls.len(), 1);
        assert_eq!(pulls[0].title, "Bump lodash from 4.17.15 to 4.17.21");
        assert_eq!(pulls[0].author_login(), Some("dependabot[bot]"));
    }

    #[tokio::test]
    async fn exhausted_rate_limit_skips_data_request() {
        let server = MockServer::start().await;
        mount_rate_limit(&server, 0).await;
        Mock::given(method("GET"))
            .and(path("/repos/octo-org/web/pulls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let result = client(&server).fetch_pulls("octo-org", "web").await;

        assert!(matches!(
            result,
            Err(FetchError::RateLimitExceeded { remaining: 0 })
        ));
    }

    #[tokio::test]
    async fn unreadable_rate_limit_skips_data_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rate_limit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octo-org/web/pulls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let api = client(&server);
        assert!(!api.rate_limit_ok().await);

        let result = api.fetch_pulls("octo-org", "web").await;
        assert!(matches!(result, Err(FetchError::RateLimitUnavailable(_))));
    }

    #[tokio::test]
    async fn unreachable_api_is_not_ok() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let api = GitHubApi::new(&uri, None).unwrap();
        assert!(!api.rate_limit_ok().await);
        assert!(api.fetch_pulls("octo-org", "web").await.unwrap_err().is_rate_limited());
    }

    #[tokio::test]
    async fn non_success_status_is_an_http_error() {
        let server = MockServer::start().await;
        mount_rate_limit(&server, 10).await;
        Mock::given(method("GET"))
            .and(path("/repos/octo-org/missing/pulls"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server).fetch_pulls("octo-org", "missing").await;

        match result {
            Err(FetchError::Http { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("expected http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_errors_are_not_retried() {
        let server = MockServer::start().await;
        mount_rate_limit(&server, 10).await;
        Mock::given(method("GET"))
            .and(path("/repos/octo-org/web/pulls"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "message": "Server Error"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server).fetch_pulls("octo-org", "web").await;
        assert!(matches!(result, Err(FetchError::Http { status: 500, .. })));
    }

    #[tokio::test]
    async fn non_json_error_page_is_an_http_error() {
        let server = MockServer::start().await;
        mount_rate_limit(&server, 10).await;
        Mock::given(method("GET"))
            .and(path("/repos/octo-org/web/pulls"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad gateway</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server).fetch_pulls("octo-org", "web").await;

        match result {
            Err(FetchError::Http { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_error_body_is_an_http_error() {
        let server = MockServer::start().await;
        mount_rate_limit(&server, 10).await;
        Mock::given(method("GET"))
            .and(path("/repos/octo-org/web/pulls"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = client(&server).fetch_pulls("octo-org", "web").await;
        assert!(matches!(result, Err(FetchError::Http { status: 503, .. })));
    }

    #[tokio::test]
    async fn undecodable_success_body_is_a_decode_error() {
        let server = MockServer::start().await;
        mount_rate_limit(&server, 10).await;
        Mock::given(method("GET"))
            .and(path("/repos/octo-org/web/pulls"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client(&server).fetch_pulls("octo-org", "web").await;
        assert!(matches!(result, Err(FetchError::Decode { .. })));
    }

    #[test]
    fn extracts_message_from_github_error_body() {
        assert_eq!(
            extract_github_message(r#"{"message":"Not Found"}"#),
            Some("Not Found".to_string())
        );
        assert_eq!(extract_github_message("<html></html>"), None);
    }

    #[tokio::test]
    async fn fetches_user_repos() {
        let server = MockServer::start().await;
        mount_rate_limit(&server, 10).await;
        Mock::given(method("GET"))
            .and(path("/users/octo-org/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "name": "web", "full_name": "octo-org/web" },
                { "name": "api", "full_name": "octo-org/api" }
            ])))
            .mount(&server)
            .await;

        let repos = client(&server).fetch_user_repos("octo-org").await.unwrap();

        let names: Vec<&str> = repos.iter().map(|repo| repo.name.as_str()).collect();
        assert_eq!(names, vec!["web", "api"]);
    }

    #[tokio::test]
    async fn repository_name_that_is_not_a_path_is_rejected() {
        let server = MockServer::start().await;
        mount_rate_limit(&server, 10).await;

        let result = client(&server).fetch_pulls("octo-org", "my repo").await;
        assert!(matches!(result, Err(FetchError::InvalidRoute { .. })));
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = GitHubApi::new("not a uri", None);
        assert!(matches!(result, Err(FetchError::InvalidBaseUrl { .. })));
    }
}
