//! Service Layer Error Types
//!
//! Errors surfaced by [`crate::services::EditSession`]. Lower-layer errors
//! are chained so callers can match on the original cause.

use crate::operations::ForumOperationError;
use crate::services::collaborators::EditErrorInfo;
use crate::wikitext::ParseError;
use thiserror::Error;

/// Forum editing errors
#[derive(Error, Debug)]
pub enum ForumServiceError {
    /// The wiki rejected the edit; the in-memory tree keeps the change
    #[error("Edit submission rejected: {}", join_errors(.errors))]
    SubmissionFailed { errors: Vec<EditErrorInfo> },

    /// Locating the forum or thread failed
    #[error("Forum operation failed: {0}")]
    Operation(#[from] ForumOperationError),

    /// The page text could not be read back as forums
    #[error("Failed to parse page: {0}")]
    Parse(#[from] ParseError),

    /// A page source or submitter failed before producing a response
    #[error("Collaborator failed: {0}")]
    Collaborator(#[source] anyhow::Error),

    /// Posts and edits need non-blank content
    #[error("Content cannot be empty")]
    EmptyContent,

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

fn join_errors(errors: &[EditErrorInfo]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ForumServiceError {
    /// Create a submission failure error
    pub fn submission_failed(errors: Vec<EditErrorInfo>) -> Self {
        Self::SubmissionFailed { errors }
    }

    /// Wrap a collaborator failure
    pub fn collaborator(error: anyhow::Error) -> Self {
        Self::Collaborator(error)
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether the error is a thread or forum lookup miss
    pub fn is_locate_miss(&self) -> bool {
        matches!(self, Self::Operation(_))
    }
}
