//! WikiForum Core
//!
//! This crate overlays threaded discussions onto wiki pages by storing the
//! whole discussion tree inside the page text, between machine-readable
//! marker comments, and re-deriving that text on every reply or edit.
//!
//! # Architecture
//!
//! - **Tree in the page**: there is no separate storage; the page text is the database
//! - **Round-trip codec**: serializing a forum and parsing it back yields the same tree
//! - **Explicit session**: an `EditSession` owns the loaded tree from page load to reload
//! - **Injected collaborators**: page fetch, edit submission, identity and clock are traits
//!
//! # Modules
//!
//! - [`models`] - Forum, Thread and metadata types
//! - [`utils`] - `data-*` attribute codec
//! - [`wikitext`] - serializer and parser for the page block
//! - [`operations`] - thread lookup and mutations
//! - [`services`] - edit session and collaborator traits
//! - [`config`] - editing configuration

pub mod config;
pub mod models;
pub mod operations;
pub mod services;
pub mod utils;
pub mod wikitext;

// Re-export commonly used types
pub use config::ForumConfig;
pub use models::*;
pub use operations::ForumOperationError;
pub use services::*;
