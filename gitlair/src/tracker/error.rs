//! Tracker error types.

use crate::bumps::BumpParseError;
use crate::config::ConfigError;
use crate::github::FetchError;

/// Errors that stop a tracker run.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Settings loading and validation errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Client(#[from] FetchError),

    /// A bot pull request could not be parsed under the abort policy.
    #[error("Malformed bump in repository '{repository}': {source}")]
    MalformedBump {
        repository: String,
        #[source]
        source: BumpParseError,
    },

    /// The owner's repositories could not be listed.
    #[error("Failed to discover repositories of '{owner}': {source}")]
    Discovery {
        owner: String,
        #[source]
        source: FetchError,
    },
}
