//! Error types for forum tree operations
//!
//! Lookups that miss are reported explicitly so the caller can decide
//! whether to surface or ignore them; a miss never mutates the tree.

use thiserror::Error;

/// Errors that can occur while locating or mutating threads
///
/// # Examples
///
/// ```rust
/// use wikiforum_core::operations::ForumOperationError;
///
/// let err = ForumOperationError::thread_not_found(Some(1), "2-4");
/// assert_eq!(err.to_string(), "Thread '2-4' not found in forum#1");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForumOperationError {
    /// No thread in the forum carries the requested id
    #[error("Thread '{thread_id}' not found in forum#{}", forum_label(.forum_id))]
    ThreadNotFound {
        forum_id: Option<u32>,
        thread_id: String,
    },

    /// The page has no forum with the requested display id
    #[error("Forum #{forum_id} does not exist (page has {available} forum(s))")]
    ForumNotFound { forum_id: u32, available: usize },
}

fn forum_label(forum_id: &Option<u32>) -> String {
    forum_id.map_or_else(|| "latest".to_string(), |id| id.to_string())
}

impl ForumOperationError {
    pub fn thread_not_found(forum_id: Option<u32>, thread_id: impl Into<String>) -> Self {
        Self::ThreadNotFound {
            forum_id,
            thread_id: thread_id.into(),
        }
    }

    pub fn forum_not_found(forum_id: u32, available: usize) -> Self {
        Self::ForumNotFound {
            forum_id,
            available,
        }
    }
}
