#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod bumps;
pub mod config;
pub mod github;
pub mod report;
pub mod templates;
pub mod tracker;
pub mod web;

pub use bumps::{
    extract_bumps, extract_bumps_lenient, parse_update_line, Bump, BumpKind, BumpParseError,
    Extraction,
};
pub use config::{ConfigError, MalformedLinePolicy, Settings};
pub use github::{FetchError, GitHubApi, PullRequest, RateLimitInfo, Repository};
pub use report::{BumpReport, RepositoryFailure, RepositoryOutcome, ReportStatus, SkippedLine};
pub use templates::{PageRenderer, TemplateError};
pub use tracker::{BumpTracker, TrackerError};
pub use web::{router, serve, AppState};
