//! Forum Data Structures
//!
//! A `Forum` is one discussion embedded in a page: an ordered list of
//! top-level threads, the first of which is the original post.

use crate::models::{Attributes, Thread, ThreadId};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// One discussion on a page
///
/// # Fields
///
/// - `id`: 1-based display id (`None` renders as `latest`); never 0
/// - `meta`: free-form forum attributes (title, page name, …)
/// - `threads`: top-level threads in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forum {
    pub id: Option<NonZeroU32>,

    #[serde(default)]
    pub meta: Attributes,

    #[serde(default)]
    pub threads: Vec<Thread>,
}

impl Forum {
    /// Create an empty forum
    ///
    /// `Some(0)` is not a display id and yields an unassigned (`latest`) forum.
    pub fn new(id: Option<u32>) -> Self {
        Self {
            id: id.and_then(NonZeroU32::new),
            meta: Attributes::new(),
            threads: Vec::new(),
        }
    }

    /// The original post, if present
    pub fn original_post(&self) -> Option<&Thread> {
        self.threads.first()
    }

    /// Title for display
    pub fn title(&self) -> String {
        match self.meta.get("title") {
            Some(title) => title.to_string(),
            None => format!(
                "[UNTITLED] Forum Topic #{}",
                self.id.map_or_else(|| "latest".to_string(), |id| id.to_string())
            ),
        }
    }

    /// Id the next appended top-level thread receives
    pub fn next_thread_id(&self) -> ThreadId {
        ThreadId::top_level(self.threads.len())
    }

    /// Total number of threads at every depth
    pub fn thread_count(&self) -> usize {
        self.threads.iter().map(Thread::subtree_len).sum()
    }

    /// Assign positional ids to every thread in the forum
    ///
    /// Threads stored as `latest`, or under ids that no longer match
    /// their position, get their positional id back.
    pub fn renumber(&mut self) {
        for (index, thread) in self.threads.iter_mut().enumerate() {
            thread.id = Some(ThreadId::top_level(index));
            thread.renumber_children();
        }
    }
}
