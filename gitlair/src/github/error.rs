//! GitHub API error types.

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The core rate limit has no requests left.
    #[error("GitHub API rate limit exceeded ({remaining} requests remaining)")]
    RateLimitExceeded { remaining: i64 },

    /// The rate limit could not be read, so no data request was attempted.
    #[error("GitHub API rate limit could not be checked: {0}")]
    RateLimitUnavailable(String),

    /// GitHub answered with a non-success status.
    #[error("GitHub API request failed with status code {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never produced a response.
    #[error("GitHub API transport error: {0}")]
    Transport(String),

    /// The configured base URL is not a valid URI.
    #[error("Invalid GitHub API base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// An owner or repository name produced a path that is not a valid URI.
    #[error("Invalid GitHub API route '{route}': {message}")]
    InvalidRoute { route: String, message: String },

    /// A success response whose body did not match the expected shape.
    #[error("GitHub API response for '{route}' could not be decoded: {source}")]
    Decode {
        route: String,
        #[source]
        source: serde_json::Error,
    },

    /// Any other client error.
    #[error("GitHub client error: {0}")]
    Client(#[from] octocrab::Error),
}

impl FetchError {
    /// Returns true if the request was refused before reaching the data endpoint.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            Self::RateLimitExceeded { .. } | Self::RateLimitUnavailable(_)
        )
    }
}
