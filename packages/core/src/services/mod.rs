//! Business Services
//!
//! This module contains the editing services built on the forum tree:
//!
//! - `EditSession` - owns a page's forums and runs mutate → render → submit → reload
//! - `collaborators` - traits for page retrieval, edit submission and user identity
//! - `InMemoryWiki` - in-process page store implementing both wiki traits
//!
//! Services coordinate between the tree operations and the external wiki,
//! reporting every failure to the caller instead of recovering silently.

pub mod collaborators;
pub mod edit_session;
pub mod error;
pub mod in_memory;

pub use collaborators::{
    EditErrorInfo, EditRequest, EditResponse, EditSubmitter, PageSource, StaticUser, UserIdentity,
};
pub use edit_session::{Collaborators, EditOutcome, EditSession};
pub use error::ForumServiceError;
pub use in_memory::InMemoryWiki;
