//! Thread lookup by id
//!
//! Searches are depth-first pre-order over the forum's top-level threads:
//! a node is checked before its replies, and replies before the node's
//! next sibling. The first match ends the search, so repeated lookups on
//! identical trees always resolve to the same node.
//!
//! Mutable access goes through a sibling-index path rather than a
//! recursive `&mut` search: [`thread_path`] finds the node, and
//! [`thread_at_mut`] walks the path to borrow it.

use crate::models::{Forum, Thread};

/// Sibling indexes from the forum's top level down to a thread
pub type ThreadPath = Vec<usize>;

/// Path to the first thread carrying `thread_id`
pub fn thread_path(threads: &[Thread], thread_id: &str) -> Option<ThreadPath> {
    for (index, thread) in threads.iter().enumerate() {
        if thread.has_id(thread_id) {
            return Some(vec![index]);
        }

        if let Some(mut path) = thread_path(&thread.threads, thread_id) {
            path.insert(0, index);
            return Some(path);
        }
    }

    None
}

/// Borrow the thread at `path`
pub fn thread_at<'a>(threads: &'a [Thread], path: &[usize]) -> Option<&'a Thread> {
    let (first, rest) = path.split_first()?;
    let mut node = threads.get(*first)?;
    for index in rest {
        node = node.threads.get(*index)?;
    }
    Some(node)
}

/// Mutably borrow the thread at `path`
pub fn thread_at_mut<'a>(threads: &'a mut [Thread], path: &[usize]) -> Option<&'a mut Thread> {
    let (first, rest) = path.split_first()?;
    let mut node = threads.get_mut(*first)?;
    for index in rest {
        node = node.threads.get_mut(*index)?;
    }
    Some(node)
}

/// First thread in the forum carrying `thread_id`
pub fn find_thread<'a>(forum: &'a Forum, thread_id: &str) -> Option<&'a Thread> {
    let path = thread_path(&forum.threads, thread_id)?;
    thread_at(&forum.threads, &path)
}

/// Mutable access to the first thread in the forum carrying `thread_id`
pub fn find_thread_mut<'a>(forum: &'a mut Forum, thread_id: &str) -> Option<&'a mut Thread> {
    let path = thread_path(&forum.threads, thread_id)?;
    thread_at_mut(&mut forum.threads, &path)
}
