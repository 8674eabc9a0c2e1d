//! A single dependency upgrade.

use serde::Serialize;

/// One library upgrade proposed by the update bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bump {
    /// Repository the pull request was opened against.
    pub repository: String,

    /// Upgraded library.
    pub library: String,

    /// Version before the upgrade.
    pub version_from: String,

    /// Version after the upgrade.
    pub version_to: String,

    /// Number of the source pull request.
    pub pull_number: Option<u64>,

    /// Browser URL of the source pull request.
    pub pull_url: Option<String>,
}
