//! Overall report status.

use serde::Serialize;

/// Status flag shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// No pending bumps.
    Success,

    /// At least one pending bump.
    Warning,
}

impl ReportStatus {
    /// Derives the status from the number of bumps found.
    #[must_use]
    pub fn from_bump_count(count: usize) -> Self {
        if count == 0 {
            Self::Success
        } else {
            Self::Warning
        }
    }

    /// Returns the status as a string, also used as the CSS class on the page.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}
