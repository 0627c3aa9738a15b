//! Forum Tree Operations
//!
//! Locate-and-mutate operations on a single forum's thread tree. Every
//! call is one synchronous transformation with no state kept between
//! calls; submitting the result is the job of
//! [`crate::services::EditSession`].
//!
//! - [`locator`] - deterministic pre-order lookup by thread id
//! - [`mutations`] - `update_thread`, `add_thread`, `add_reply`

pub mod error;
pub mod locator;
pub mod mutations;

pub use error::ForumOperationError;
pub use locator::{find_thread, find_thread_mut, thread_at, thread_at_mut, thread_path, ThreadPath};
pub use mutations::{add_reply, add_thread, update_thread};
