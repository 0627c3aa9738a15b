//! Thread Data Structures
//!
//! A `Thread` is one node of a forum's discussion tree: the original post,
//! a top-level reply ("floor"), or a reply nested under another reply.
//!
//! # Identifiers
//!
//! Thread identifiers are unique only inside their forum. The positional
//! numbering scheme gives top-level threads `1`, `2`, `3`… and nests child
//! ids under their parent with a `-` separator (`2-1`, `2-1-3`). The id `1`
//! always denotes the original post.

use crate::models::Attributes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the original post in every forum
pub const ROOT_THREAD_ID: &str = "1";

/// Separator between the segments of a nested thread id
const ID_SEPARATOR: char = '-';

/// Forum-scoped thread identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(String);

impl ThreadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the top-level thread at `index` (0-based)
    pub fn top_level(index: usize) -> Self {
        Self((index + 1).to_string())
    }

    /// Id of this thread's child at `index` (0-based)
    pub fn child(&self, index: usize) -> Self {
        Self(format!("{}{}{}", self.0, ID_SEPARATOR, index + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the original post
    pub fn is_root(&self) -> bool {
        self.0 == ROOT_THREAD_ID
    }

    /// Nesting depth under the positional scheme (`2` → 1, `2-1` → 2)
    pub fn depth(&self) -> usize {
        self.0.split(ID_SEPARATOR).count()
    }

    /// True when the id nests deeper than `max_depth`
    pub fn is_complex(&self, max_depth: usize) -> bool {
        self.depth() > max_depth
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThreadId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ThreadId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for ThreadId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ThreadId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Bookkeeping metadata of a thread
///
/// The four known fields are first-class; every other attribute found on
/// the page is kept in `extra` so it survives re-serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadMeta {
    /// Creator of the thread
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_author: Option<String>,

    /// Last user to modify the content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_last: Option<String>,

    /// Creation timestamp (ISO-8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_publish: Option<String>,

    /// Last modification timestamp (ISO-8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_modify: Option<String>,

    /// Attributes without a dedicated field, in page order
    #[serde(flatten)]
    pub extra: Attributes,
}

impl ThreadMeta {
    pub const USER_AUTHOR: &'static str = "userAuthor";
    pub const USER_LAST: &'static str = "userLast";
    pub const TIME_PUBLISH: &'static str = "timePublish";
    pub const TIME_MODIFY: &'static str = "timeModify";

    /// Metadata for a freshly created thread
    pub fn authored(user: &str, now: &str) -> Self {
        Self {
            user_author: Some(user.to_string()),
            user_last: Some(user.to_string()),
            time_publish: Some(now.to_string()),
            time_modify: Some(now.to_string()),
            extra: Attributes::new(),
        }
    }

    /// Record a modification by `user` at `now`
    pub fn touch(&mut self, user: &str, now: &str) {
        self.user_last = Some(user.to_string());
        self.time_modify = Some(now.to_string());
    }

    /// Split a raw attribute map into known fields and extras
    pub fn from_attributes(mut attributes: Attributes) -> Self {
        Self {
            user_author: attributes.remove(Self::USER_AUTHOR),
            user_last: attributes.remove(Self::USER_LAST),
            time_publish: attributes.remove(Self::TIME_PUBLISH),
            time_modify: attributes.remove(Self::TIME_MODIFY),
            extra: attributes,
        }
    }

    /// Flatten back to an attribute map: known fields first, then extras
    pub fn to_attributes(&self) -> Attributes {
        let known = [
            (Self::USER_AUTHOR, &self.user_author),
            (Self::USER_LAST, &self.user_last),
            (Self::TIME_PUBLISH, &self.time_publish),
            (Self::TIME_MODIFY, &self.time_modify),
        ];

        let mut attributes: Attributes = known
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone())))
            .collect();
        attributes.extend(self.extra.iter());
        attributes
    }

    /// Author for display, falling back to the legacy `user` key
    pub fn author_or_unsigned(&self) -> &str {
        self.user_author
            .as_deref()
            .or_else(|| self.extra.get("user"))
            .unwrap_or("unsigned")
    }

    /// Last editor for display; the author when never edited
    pub fn last_editor(&self) -> &str {
        self.user_last
            .as_deref()
            .unwrap_or_else(|| self.author_or_unsigned())
    }

    /// Publish time, falling back to legacy `timeRelease` / `release` keys
    pub fn published(&self) -> Option<&str> {
        self.time_publish
            .as_deref()
            .or_else(|| self.extra.get("timeRelease"))
            .or_else(|| self.extra.get("release"))
    }

    /// Modification time; the publish time when never edited
    pub fn modified(&self) -> Option<&str> {
        self.time_modify.as_deref().or_else(|| self.published())
    }
}

/// A node of the discussion tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    /// Forum-scoped id; `None` until the page is renumbered
    pub id: Option<ThreadId>,

    pub meta: ThreadMeta,

    /// Pre-formatted content, stored verbatim
    pub content: String,

    /// Direct replies in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub threads: Vec<Thread>,
}

impl Thread {
    /// Create a new leaf thread authored by `user` at `now`
    pub fn new(id: Option<ThreadId>, content: impl Into<String>, user: &str, now: &str) -> Self {
        Self {
            id,
            meta: ThreadMeta::authored(user, now),
            content: content.into(),
            threads: Vec::new(),
        }
    }

    /// Whether this thread carries the given id
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_ref().is_some_and(|own| own == id)
    }

    /// Id the next appended child receives under the positional scheme
    ///
    /// `None` when this thread has no id of its own.
    pub fn next_child_id(&self) -> Option<ThreadId> {
        self.id.as_ref().map(|id| id.child(self.threads.len()))
    }

    /// Number of threads in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + self.threads.iter().map(Thread::subtree_len).sum::<usize>()
    }

    /// Assign positional ids to every child below this thread
    pub(crate) fn renumber_children(&mut self) {
        let Some(parent) = self.id.clone() else {
            return;
        };

        for (index, child) in self.threads.iter_mut().enumerate() {
            child.id = Some(parent.child(index));
            child.renumber_children();
        }
    }
}
