//! WikiForum development tools
//!
//! Support code for the `forum-tool` binary: a page store backed by a
//! local file and a plain-text outline of a page's forums.

pub mod file_store;
pub mod outline;

pub use file_store::FilePageStore;
pub use outline::render_outline;
