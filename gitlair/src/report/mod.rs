//! Aggregated results of a tracker run.

mod bump_report;
mod outcome;
mod status;

pub use bump_report::{BumpReport, RepositoryFailure, SkippedLine};
pub use outcome::RepositoryOutcome;
pub use status::ReportStatus;
