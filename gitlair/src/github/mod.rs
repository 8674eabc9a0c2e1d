//! GitHub REST API access.
//!
//! Every data request is preceded by a check of the core rate limit. When the
//! quota is exhausted, or cannot be read at all, the data request is never sent.

mod client;
mod error;
mod models;
mod rate_limit;

pub use client::GitHubApi;
pub use error::FetchError;
pub use models::{Author, PullRequest, Repository};
pub use rate_limit::RateLimitInfo;
