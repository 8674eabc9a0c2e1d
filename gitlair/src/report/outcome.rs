//! Per-repository processing outcome.

use crate::bumps::{Bump, BumpParseError};

/// Result of processing a single repository.
#[derive(Debug, Clone)]
pub enum RepositoryOutcome {
    /// Pull requests were fetched and parsed.
    Fetched {
        /// Repository name.
        repository: String,
        /// Extracted bumps.
        bumps: Vec<Bump>,
        /// Malformed lines skipped under the skip policy.
        skipped: Vec<BumpParseError>,
    },

    /// Pull requests could not be fetched.
    Failed {
        /// Repository name.
        repository: String,
        /// Error message.
        error: String,
    },
}

impl RepositoryOutcome {
    /// Returns the repository name.
    #[must_use]
    pub fn repository(&self) -> &str {
        match self {
            Self::Fetched { repository, .. } | Self::Failed { repository, .. } => repository,
        }
    }
}
