//! Orchestrates fetching pull requests and extracting bumps.

mod error;

pub use error::TrackerError;

use crate::bumps::{extract_bumps, extract_bumps_lenient};
use crate::config::{MalformedLinePolicy, Settings};
use crate::github::GitHubApi;
use crate::report::{BumpReport, RepositoryOutcome};
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info, info_span, warn, Instrument};

/// Collects bot bumps across the configured repositories.
#[derive(Clone)]
pub struct BumpTracker {
    settings: Settings,
    api: GitHubApi,
}

impl BumpTracker {
    /// Builds a tracker from validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Config`] for invalid settings and
    /// [`TrackerError::Client`] when the API client cannot be built.
    pub fn new(settings: Settings, token: Option<&str>) -> Result<Self, TrackerError> {
        settings.validate("settings")?;
        let api = GitHubApi::from_settings(&settings, token)?;
        Ok(Self { settings, api })
    }

    /// Returns the settings this tracker runs with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs over the configured repositories, or all of the owner's
    /// repositories when none are configured.
    ///
    /// # Errors
    ///
    /// See [`BumpTracker::fetch_bumps`]; additionally
    /// [`TrackerError::Discovery`] when repository discovery fails.
    pub async fn run(&self) -> Result<BumpReport, TrackerError> {
        let repositories = self.resolve_repositories().await?;
        self.fetch_bumps(&repositories).await
    }

    /// Fetches and parses the bot's pull requests in each repository.
    ///
    /// A repository whose pull requests cannot be fetched is recorded as a
    /// failure and contributes no bumps.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MalformedBump`] for the first malformed bump
    /// when the malformed line policy is [`MalformedLinePolicy::Abort`].
    pub async fn fetch_bumps(&self, repositories: &[String]) -> Result<BumpReport, TrackerError> {
        info!(
            owner = %self.settings.owner,
            count = repositories.len(),
            malformed_lines = self.settings.malformed_lines.as_str(),
            "Fetching bumps"
        );

        let outcomes: Vec<RepositoryOutcome> = stream::iter(repositories.iter().cloned())
            .map(|repository| process_repository(&self.api, &self.settings, repository))
            .buffered(self.settings.concurrency.max(1))
            .try_collect()
            .await?;

        let mut report = BumpReport::new();
        for outcome in outcomes {
            debug!(repo = %outcome.repository(), "Recording outcome");
            report.record(outcome);
        }

        info!(
            bumps = report.bumps.len(),
            failures = report.failures.len(),
            status = report.status().as_str(),
            "Fetched bumps"
        );
        Ok(report)
    }

    async fn resolve_repositories(&self) -> Result<Vec<String>, TrackerError> {
        if !self.settings.repositories.is_empty() {
            return Ok(self.settings.repositories.clone());
        }

        info!(owner = %self.settings.owner, "No repositories configured, discovering");
        let repositories = self
            .api
            .fetch_user_repos(&self.settings.owner)
            .await
            .map_err(|source| TrackerError::Discovery {
                owner: self.settings.owner.clone(),
                source,
            })?;

        Ok(repositories.into_iter().map(|repo| repo.name).collect())
    }
}

async fn process_repository(
    api: &GitHubApi,
    settings: &Settings,
    repository: String,
) -> Result<RepositoryOutcome, TrackerError> {
    let span = info_span!("repository", owner = %settings.owner, repo = %repository);

    async {
        let pulls = match api.fetch_pulls(&settings.owner, &repository).await {
            Ok(pulls) => pulls,
            Err(e) => {
                warn!(error = %e, "Failed to fetch pull requests, skipping repository");
                return Ok(RepositoryOutcome::Failed {
                    repository: repository.clone(),
                    error: e.to_string(),
                });
            }
        };
        debug!(count = pulls.len(), "Fetched pull requests");

        let (bumps, skipped) = match settings.malformed_lines {
            MalformedLinePolicy::Abort => {
                let bumps = extract_bumps(&pulls, &repository, &settings.bot_login).map_err(
                    |source| TrackerError::MalformedBump {
                        repository: repository.clone(),
                        source,
                    },
                )?;
                (bumps, Vec::new())
            }
            MalformedLinePolicy::Skip => {
                let extraction = extract_bumps_lenient(&pulls, &repository, &settings.bot_login);
                for e in &extraction.errors {
                    warn!(error = %e, "Skipping malformed bump");
                }
                (extraction.bumps, extraction.errors)
            }
        };

        info!(bumps = bumps.len(), "Extracted bumps");
        Ok(RepositoryOutcome::Fetched {
            repository: repository.clone(),
            bumps,
            skipped,
        })
    }
    .instrument(span)
    .await
}
