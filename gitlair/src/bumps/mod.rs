//! Extraction of dependency bumps from bot pull requests.
//!
//! The bot titles every bump `Bump <library> from <old> to <new>`. Grouped
//! pull requests repeat that grammar once per bundled library in the body, as
//! ``Updates `<library>` from <old> to <new>``. Either way the library and the
//! two versions are the 2nd, 4th and 6th whitespace-separated tokens.

mod bump;
mod error;
mod kind;

pub use bump::Bump;
pub use error::BumpParseError;
pub use kind::{is_bot_bump, BumpKind, BUMP_TITLE_PREFIX, GROUPED_MARKER};

use crate::github::PullRequest;

/// Bumps extracted while skipping malformed update lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Successfully parsed bumps, in pull request order.
    pub bumps: Vec<Bump>,

    /// Lines or pull requests that could not be parsed.
    pub errors: Vec<BumpParseError>,
}

/// Extracts every bump from the bot's pull requests.
///
/// Pull requests not opened by `bot_login`, or whose title does not start
/// with `"Bump "`, are ignored.
///
/// # Errors
///
/// Fails on the first malformed update line or grouped pull request without
/// a body.
pub fn extract_bumps(
    pulls: &[PullRequest],
    repository: &str,
    bot_login: &str,
) -> Result<Vec<Bump>, BumpParseError> {
    bump_results(pulls, repository, bot_login).collect()
}

/// Extracts bumps like [`extract_bumps`], collecting failures instead of stopping.
#[must_use]
pub fn extract_bumps_lenient(
    pulls: &[PullRequest],
    repository: &str,
    bot_login: &str,
) -> Extraction {
    let mut extraction = Extraction::default();
    for result in bump_results(pulls, repository, bot_login) {
        match result {
            Ok(bump) => extraction.bumps.push(bump),
            Err(e) => extraction.errors.push(e),
        }
    }
    extraction
}

/// Parses one update line into a bump for `pull`.
///
/// # Errors
///
/// Returns [`BumpParseError::TooFewTokens`] when the line has fewer than six
/// whitespace-separated tokens.
pub fn parse_update_line(
    line: &str,
    repository: &str,
    pull: &PullRequest,
) -> Result<Bump, BumpParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match (tokens.get(1), tokens.get(3), tokens.get(5)) {
        (Some(library), Some(version_from), Some(version_to)) => Ok(Bump {
            repository: repository.to_string(),
            library: (*library).to_string(),
            version_from: (*version_from).to_string(),
            version_to: (*version_to).to_string(),
            pull_number: pull.number,
            pull_url: pull.html_url.clone(),
        }),
        _ => Err(BumpParseError::TooFewTokens {
            line: line.to_string(),
            found: tokens.len(),
        }),
    }
}

/// Yields one result per update line of every bot bump pull request.
fn bump_results<'a>(
    pulls: &'a [PullRequest],
    repository: &'a str,
    bot_login: &'a str,
) -> impl Iterator<Item = Result<Bump, BumpParseError>> + 'a {
    pulls
        .iter()
        .filter(move |pull| is_bot_bump(pull, bot_login))
        .flat_map(move |pull| match BumpKind::classify(pull).update_lines() {
            Ok(lines) => lines
                .iter()
                .map(|line| parse_update_line(line, repository, pull))
                .collect::<Vec<_>>(),
            Err(e) => vec![Err(e)],
        })
}
