//! Classification of bot pull requests into single and grouped bumps.

use crate::bumps::BumpParseError;
use crate::github::PullRequest;

/// Title prefix of every bump pull request.
pub const BUMP_TITLE_PREFIX: &str = "Bump ";

/// Title fragment marking a pull request that bundles several bumps.
///
/// Matched as a plain substring anywhere in the title.
pub const GROUPED_MARKER: &str = "Bump the bundler group";

/// Prefix of the body lines that list the bumps of a grouped pull request.
const UPDATE_LINE_PREFIX: &str = "Updates `";

/// How the update lines of a bump pull request are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind<'a> {
    /// The title itself is the only update line.
    Single {
        /// Pull request title.
        title: &'a str,
    },

    /// The body lists one update line per bundled bump.
    Grouped {
        /// Pull request title.
        title: &'a str,
        /// Pull request body, if any.
        body: Option<&'a str>,
    },
}

impl<'a> BumpKind<'a> {
    /// Classifies a bump pull request by its title.
    #[must_use]
    pub fn classify(pull: &'a PullRequest) -> Self {
        if pull.title.contains(GROUPED_MARKER) {
            Self::Grouped {
                title: &pull.title,
                body: pull.body.as_deref(),
            }
        } else {
            Self::Single { title: &pull.title }
        }
    }

    /// Returns true for a grouped bump.
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped { .. })
    }

    /// Expands the pull request into its update lines.
    ///
    /// Grouped bodies contribute every line starting with ``Updates ` ``, with
    /// all backticks removed.
    ///
    /// # Errors
    ///
    /// Returns [`BumpParseError::MissingBody`] for a grouped bump without a body.
    pub fn update_lines(&self) -> Result<Vec<String>, BumpParseError> {
        match self {
            Self::Single { title } => Ok(vec![(*title).to_string()]),
            Self::Grouped { title, body } => {
                let body = body.ok_or_else(|| BumpParseError::MissingBody {
                    title: (*title).to_string(),
                })?;

                Ok(body
                    .lines()
                    .filter(|line| line.starts_with(UPDATE_LINE_PREFIX))
                    .map(|line| line.replace('`', ""))
                    .collect())
            }
        }
    }
}

/// Returns true if `pull` was opened by `bot_login` and is titled like a bump.
#[must_use]
pub fn is_bot_bump(pull: &PullRequest, bot_login: &str) -> bool {
    pull.author_login() == Some(bot_login) && pull.title.starts_with(BUMP_TITLE_PREFIX)
}
