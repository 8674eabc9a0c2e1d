//! Response payloads used from the GitHub REST API.
//!
//! Only the fields the tracker reads are modelled; everything else in the
//! payload is ignored.

use serde::{Deserialize, Serialize};

/// A pull request as listed by `GET /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PullRequest {
    /// Pull request number.
    #[serde(default)]
    pub number: Option<u64>,

    /// Pull request title.
    #[serde(default)]
    pub title: String,

    /// Pull request description, absent when the author left it empty.
    #[serde(default)]
    pub body: Option<String>,

    /// Author of the pull request.
    #[serde(default)]
    pub user: Option<Author>,

    /// Browser URL of the pull request.
    #[serde(default)]
    pub html_url: Option<String>,
}

impl PullRequest {
    /// Returns the author's login, if GitHub reported one.
    #[must_use]
    pub fn author_login(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.login.as_str())
    }
}

/// The account that opened a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    /// Account login, e.g. `dependabot[bot]`.
    pub login: String,
}

/// A repository as listed by `GET /users/{owner}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repository {
    /// Repository name without the owner.
    pub name: String,
}
