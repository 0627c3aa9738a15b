//! Data Models
//!
//! This module contains the discussion-tree data structures:
//!
//! - `Forum` - one discussion embedded in a page
//! - `Thread` - a recursively nestable post with its replies
//! - `ThreadMeta` / `Attributes` - thread and forum metadata
//! - `time` - injectable clock and the page timestamp format

mod attributes;
mod forum;
mod thread;
pub mod time;

pub use attributes::Attributes;
pub use forum::Forum;
pub use thread::{Thread, ThreadId, ThreadMeta, ROOT_THREAD_ID};
