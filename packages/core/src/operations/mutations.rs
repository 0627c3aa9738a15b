//! Forum tree mutations
//!
//! Each function is one synchronous transformation of a forum: edit an
//! existing thread, append a top-level thread, or append a reply under a
//! thread. New threads get fresh author/timestamp metadata and no replies;
//! their ids come from the caller's numbering scheme.
//!
//! # Examples
//!
//! ```rust
//! use wikiforum_core::models::{Forum, Thread};
//! use wikiforum_core::operations::{add_reply, update_thread};
//!
//! let mut forum = Forum::new(Some(1));
//! forum.threads.push(Thread::new(Some("1".into()), "Hi", "Alice", "2024-01-01T00:00:00Z"));
//! forum.threads.push(Thread::new(Some("2".into()), "Hello", "Bob", "2024-01-01T01:00:00Z"));
//!
//! add_reply(&mut forum, "2", Some("2-1".into()), "Hey Bob", "Carol", "2024-02-01T00:00:00Z")?;
//! update_thread(&mut forum, "2-1", "Hey Bob!", "Carol", "2024-02-01T00:05:00Z")?;
//!
//! assert_eq!(forum.threads[1].threads[0].content, "Hey Bob!");
//! # Ok::<(), wikiforum_core::operations::ForumOperationError>(())
//! ```

use crate::models::{Forum, Thread, ThreadId};
use crate::operations::locator::{thread_at_mut, thread_path, ThreadPath};
use crate::operations::ForumOperationError;
use std::num::NonZeroU32;

/// Replace a thread's content and record the modification
///
/// Only `content`, `userLast` and `timeModify` change; the author, the
/// publish time and the replies are left as they were.
pub fn update_thread<'a>(
    forum: &'a mut Forum,
    thread_id: &str,
    content: impl Into<String>,
    user: &str,
    now: &str,
) -> Result<&'a Thread, ForumOperationError> {
    let forum_id = forum.id.map(NonZeroU32::get);
    let path = thread_path(&forum.threads, thread_id)
        .ok_or_else(|| ForumOperationError::thread_not_found(forum_id, thread_id))?;
    let thread = thread_at_mut(&mut forum.threads, &path)
        .ok_or_else(|| ForumOperationError::thread_not_found(forum_id, thread_id))?;

    thread.content = content.into();
    thread.meta.touch(user, now);

    tracing::debug!(
        "Updated thread#{} in forum#{:?} (path {:?}) as {}",
        thread_id,
        forum_id,
        path,
        user
    );
    Ok(thread)
}

/// Append a new top-level thread to the forum
///
/// Returns the path of the appended thread.
pub fn add_thread(
    forum: &mut Forum,
    new_id: Option<ThreadId>,
    content: impl Into<String>,
    user: &str,
    now: &str,
) -> ThreadPath {
    tracing::debug!(
        "Adding thread#{} to forum#{:?} as {}",
        new_id.as_ref().map_or("latest", ThreadId::as_str),
        forum.id,
        user
    );

    let path = vec![forum.threads.len()];
    forum.threads.push(Thread::new(new_id, content, user, now));
    path
}

/// Append a reply under the thread carrying `target_id`
///
/// Replying to the original post (`"1"`) starts a new top-level thread
/// instead of nesting under it. Returns the path of the appended reply.
pub fn add_reply(
    forum: &mut Forum,
    target_id: &str,
    new_id: Option<ThreadId>,
    content: impl Into<String>,
    user: &str,
    now: &str,
) -> Result<ThreadPath, ForumOperationError> {
    if ThreadId::from(target_id).is_root() {
        return Ok(add_thread(forum, new_id, content, user, now));
    }

    let forum_id = forum.id.map(NonZeroU32::get);
    let mut path = thread_path(&forum.threads, target_id)
        .ok_or_else(|| ForumOperationError::thread_not_found(forum_id, target_id))?;
    let parent = thread_at_mut(&mut forum.threads, &path)
        .ok_or_else(|| ForumOperationError::thread_not_found(forum_id, target_id))?;

    tracing::debug!(
        "Adding reply#{} under thread#{} in forum#{:?} as {}",
        new_id.as_ref().map_or("latest", ThreadId::as_str),
        target_id,
        forum_id,
        user
    );

    path.push(parent.threads.len());
    parent.threads.push(Thread::new(new_id, content, user, now));
    Ok(path)
}
