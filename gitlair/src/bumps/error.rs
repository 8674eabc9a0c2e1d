//! Bump parsing error types.

use thiserror::Error;

/// Errors raised while turning a bot pull request into bumps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BumpParseError {
    /// An update line has fewer tokens than `Bump <lib> from <old> to <new>`.
    #[error("Update line has {found} tokens, expected at least 6: '{line}'")]
    TooFewTokens { line: String, found: usize },

    /// A grouped bump pull request has no body to read update lines from.
    #[error("Grouped bump pull request has no body: '{title}'")]
    MissingBody { title: String },
}
