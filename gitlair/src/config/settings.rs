//! Tracker settings.

use crate::config::{ConfigError, MalformedLinePolicy};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Environment variable that overrides the configured API base URL.
pub const API_BASE_ENV: &str = "GITLAIR_API_BASE";

/// Immutable settings shared by the API client and the tracker.
///
/// Loaded from a TOML file with kebab-case keys:
///
/// ```toml
/// owner = "my-org"
/// repositories = ["web", "api"]
/// bot-login = "dependabot[bot]"
/// api-base = "https://api.github.com"
/// malformed-lines = "skip"
/// concurrency = 1
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Base URL of the GitHub REST API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Login of the bot account whose pull requests are listed.
    #[serde(default = "default_bot_login")]
    pub bot_login: String,

    /// Owner (user or organization) of the tracked repositories.
    pub owner: String,

    /// Repository names to scan. When empty, all of the owner's repositories are used.
    #[serde(default)]
    pub repositories: Vec<String>,

    /// What to do with bump lines that do not match the bot's title grammar.
    #[serde(default)]
    pub malformed_lines: MalformedLinePolicy,

    /// Maximum number of repositories fetched at the same time.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

/// Default GitHub REST API base URL.
pub fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

/// Default bot account login.
pub fn default_bot_login() -> String {
    "dependabot[bot]".to_string()
}

/// Repositories are fetched one after another unless configured otherwise.
pub fn default_concurrency() -> usize {
    1
}

impl Settings {
    /// Creates settings with defaults for everything but the owner.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            api_base: default_api_base(),
            bot_login: default_bot_login(),
            owner: owner.into(),
            repositories: Vec::new(),
            malformed_lines: MalformedLinePolicy::default(),
            concurrency: default_concurrency(),
        }
    }

    /// Loads settings from a TOML file, applies environment overrides and validates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, malformed
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading settings");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings = settings.with_env_overrides();
        settings.validate(&path.display().to_string())?;

        debug!(
            owner = %settings.owner,
            repositories = settings.repositories.len(),
            malformed_lines = settings.malformed_lines.as_str(),
            "Loaded settings"
        );
        Ok(settings)
    }

    /// Replaces values that have an environment override set.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(api_base) = std::env::var(API_BASE_ENV) {
            if !api_base.trim().is_empty() {
                debug!(api_base = %api_base, "Using API base from environment");
                self.api_base = api_base;
            }
        }
        self
    }

    /// Sets the repositories to scan.
    #[must_use]
    pub fn with_repositories(mut self, repositories: Vec<String>) -> Self {
        self.repositories = repositories;
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Sets the bot account login.
    #[must_use]
    pub fn with_bot_login(mut self, bot_login: impl Into<String>) -> Self {
        self.bot_login = bot_login.into();
        self
    }

    /// Sets the malformed line policy.
    #[must_use]
    pub fn with_malformed_lines(mut self, policy: MalformedLinePolicy) -> Self {
        self.malformed_lines = policy;
        self
    }

    /// Sets the maximum number of concurrent repository fetches.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Validates the settings.
    ///
    /// `origin` names where the settings came from and is used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first invalid value.
    pub fn validate(&self, origin: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: origin.to_string(),
            message,
        };

        if self.owner.trim().is_empty() {
            return Err(invalid("owner must not be empty".to_string()));
        }

        if self.bot_login.trim().is_empty() {
            return Err(invalid("bot-login must not be empty".to_string()));
        }

        match Url::parse(&self.api_base) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            _ => {
                return Err(invalid(format!(
                    "api-base is not a valid http(s) URL: {}",
                    self.api_base
                )))
            }
        }

        if self.concurrency == 0 {
            return Err(invalid("concurrency must be at least 1".to_string()));
        }

        if self.repositories.iter().any(|name| name.trim().is_empty()) {
            return Err(invalid("repository names must not be empty".to_string()));
        }

        Ok(())
    }
}
