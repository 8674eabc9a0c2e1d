//! Aggregated bump report.

use super::outcome::RepositoryOutcome;
use super::status::ReportStatus;
use crate::bumps::Bump;
use serde::Serialize;

/// A repository whose pull requests could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryFailure {
    /// Repository name.
    pub repository: String,

    /// Error message.
    pub error: String,
}

/// A malformed update line that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// Repository name.
    pub repository: String,

    /// Parse error message.
    pub error: String,
}

/// Everything found in one pass over the tracked repositories.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BumpReport {
    /// All bumps, in repository order.
    pub bumps: Vec<Bump>,

    /// Repositories that could not be fetched.
    pub failures: Vec<RepositoryFailure>,

    /// Malformed lines skipped under the skip policy.
    pub skipped: Vec<SkippedLine>,

    /// Number of repositories processed, including failed ones.
    pub repositories_checked: usize,
}

impl BumpReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one repository's outcome to the report.
    pub fn record(&mut self, outcome: RepositoryOutcome) {
        self.repositories_checked += 1;
        match outcome {
            RepositoryOutcome::Fetched {
                repository,
                bumps,
                skipped,
            } => {
                self.bumps.extend(bumps);
                self.skipped
                    .extend(skipped.into_iter().map(|error| SkippedLine {
                        repository: repository.clone(),
                        error: error.to_string(),
                    }));
            }
            RepositoryOutcome::Failed { repository, error } => {
                self.failures.push(RepositoryFailure { repository, error });
            }
        }
    }

    /// Returns [`ReportStatus::Warning`] if any bump was found.
    ///
    /// Fetch failures do not affect the status.
    #[must_use]
    pub fn status(&self) -> ReportStatus {
        ReportStatus::from_bump_count(self.bumps.len())
    }

    /// Returns true if any repository failed to fetch.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
