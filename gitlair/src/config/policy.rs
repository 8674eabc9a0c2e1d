//! Handling of update lines that do not match the bot's title grammar.

use serde::{Deserialize, Serialize};

/// What the tracker does when a bot pull request contains a malformed update line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedLinePolicy {
    /// Fail the whole report on the first malformed line.
    #[default]
    Abort,

    /// Log the malformed line, record it on the report and keep going.
    Skip,
}

impl MalformedLinePolicy {
    /// Returns the policy as it is spelled in settings files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        }
    }
}
