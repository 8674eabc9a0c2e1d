//! Core rate limit information.

use serde::Deserialize;

/// Rate limit information for the core API (pulls, repositories, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: i64,

    /// Total requests allowed per window, when reported.
    pub limit: Option<i64>,

    /// Unix timestamp when the rate limit resets, when reported.
    pub reset: Option<u64>,
}

impl RateLimitInfo {
    /// Returns true if at least one request is left in the current window.
    #[must_use]
    pub fn has_remaining(&self) -> bool {
        self.remaining > 0
    }
}

/// Payload of `GET /rate_limit`.
#[derive(Debug, Deserialize)]
pub(super) struct RateLimitResponse {
    resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
struct RateLimitResources {
    core: CoreRateLimit,
}

#[derive(Debug, Deserialize)]
struct CoreRateLimit {
    remaining: i64,
    #[serde(default)]
    limit: Option<i64>,
    #[serde(default)]
    reset: Option<u64>,
}

impl From<RateLimitResponse> for RateLimitInfo {
    fn from(value: RateLimitResponse) -> Self {
        let core = value.resources.core;
        Self {
            remaining: core.remaining,
            limit: core.limit,
            reset: core.reset,
        }
    }
}
