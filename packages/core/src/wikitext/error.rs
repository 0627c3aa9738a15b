//! Wikitext parsing errors

use thiserror::Error;

/// Errors raised while reading a forum block back from page text
///
/// Offsets are byte positions into the page text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A start marker without its matching end marker
    #[error("Unterminated {marker} starting at byte {offset}")]
    UnterminatedBlock { marker: String, offset: usize },

    /// A thread block without a `start content` / `end content` pair
    #[error("Thread '{thread}' has no content section")]
    MissingContent { thread: String },

    /// A forum marker whose id is neither a positive number nor `latest`
    #[error("Invalid forum id '{id}'")]
    InvalidForumId { id: String },

    /// Expected container markup was not found
    #[error("Malformed container at byte {offset}: expected {expected}")]
    MalformedContainer { expected: String, offset: usize },
}

impl ParseError {
    pub fn unterminated(marker: impl Into<String>, offset: usize) -> Self {
        Self::UnterminatedBlock {
            marker: marker.into(),
            offset,
        }
    }

    pub fn missing_content(thread: impl Into<String>) -> Self {
        Self::MissingContent {
            thread: thread.into(),
        }
    }

    pub fn invalid_forum_id(id: impl Into<String>) -> Self {
        Self::InvalidForumId { id: id.into() }
    }

    pub fn malformed(expected: impl Into<String>, offset: usize) -> Self {
        Self::MalformedContainer {
            expected: expected.into(),
            offset,
        }
    }
}
