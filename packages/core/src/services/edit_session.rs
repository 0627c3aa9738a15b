//! Forum Edit Session
//!
//! An `EditSession` owns the forums loaded from one page for as long as
//! the page is being edited. Each edit action mutates the tree, renders
//! the whole page block, submits it, and on success replaces the tree
//! with a freshly loaded copy of the page.
//!
//! # Failure Semantics
//!
//! A rejected submission is returned as
//! [`ForumServiceError::SubmissionFailed`] without retry. The in-memory
//! tree keeps the mutation, so it may now differ from the page; callers
//! that want the page state back call [`EditSession::reload`].
//!
//! Edit methods take `&mut self`, so a session can only have one
//! submission in flight.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wikiforum_core::config::ForumConfig;
//! use wikiforum_core::services::{Collaborators, EditSession, InMemoryWiki, StaticUser};
//!
//! # async fn example() -> Result<(), wikiforum_core::services::ForumServiceError> {
//! let wiki = Arc::new(InMemoryWiki::with_page("Talk:Main", "..."));
//! let collaborators = Collaborators::new(wiki.clone(), wiki, Arc::new(StaticUser::new("Alice")));
//!
//! let mut session = EditSession::load("Talk:Main", ForumConfig::default(), collaborators).await?;
//! session.add_reply(1, "2", "Thanks, that fixed it").await?;
//! # Ok(())
//! # }
//! ```

use crate::config::ForumConfig;
use crate::models::time::{format_timestamp, SystemTimeProvider, TimeProvider};
use crate::models::{Forum, Thread, ThreadId};
use crate::operations::{self, find_thread, ForumOperationError};
use crate::services::collaborators::{EditRequest, EditSubmitter, PageSource, UserIdentity};
use crate::services::ForumServiceError;
use crate::wikitext::{parse_document, serialize_document};
use std::sync::Arc;

/// Services an edit session relies on
#[derive(Clone)]
pub struct Collaborators {
    pub pages: Arc<dyn PageSource>,
    pub submitter: Arc<dyn EditSubmitter>,
    pub identity: Arc<dyn UserIdentity>,
    pub clock: Arc<dyn TimeProvider>,
}

impl Collaborators {
    /// Collaborators using the system clock
    pub fn new(
        pages: Arc<dyn PageSource>,
        submitter: Arc<dyn EditSubmitter>,
        identity: Arc<dyn UserIdentity>,
    ) -> Self {
        Self {
            pages,
            submitter,
            identity,
            clock: Arc::new(SystemTimeProvider),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn TimeProvider>) -> Self {
        self.clock = clock;
        self
    }
}

/// Result of a successful edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Summary the edit was submitted with
    pub summary: String,

    /// Id given to a newly created thread, if any
    pub new_thread_id: Option<ThreadId>,

    /// Whether the forums were re-read from the page afterwards
    pub reloaded: bool,
}

/// Editing context for the forums of one page
pub struct EditSession {
    page_name: String,
    forums: Vec<Forum>,
    config: ForumConfig,
    collaborators: Collaborators,
}

impl EditSession {
    /// Create a session over forums that were already loaded
    pub fn new(
        page_name: impl Into<String>,
        forums: Vec<Forum>,
        config: ForumConfig,
        collaborators: Collaborators,
    ) -> Result<Self, ForumServiceError> {
        config.validate().map_err(ForumServiceError::invalid_config)?;

        Ok(Self {
            page_name: page_name.into(),
            forums,
            config,
            collaborators,
        })
    }

    /// Fetch and parse `page_name`, then open a session over it
    pub async fn load(
        page_name: impl Into<String>,
        config: ForumConfig,
        collaborators: Collaborators,
    ) -> Result<Self, ForumServiceError> {
        let mut session = Self::new(page_name, Vec::new(), config, collaborators)?;
        session.reload().await?;
        Ok(session)
    }

    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    pub fn forums(&self) -> &[Forum] {
        &self.forums
    }

    pub fn config(&self) -> &ForumConfig {
        &self.config
    }

    /// Forum by its 1-based display id
    pub fn forum(&self, forum_id: u32) -> Option<&Forum> {
        let index = usize::try_from(forum_id.checked_sub(1)?).ok()?;
        self.forums.get(index)
    }

    /// Thread by forum display id and thread id
    pub fn thread(&self, forum_id: u32, thread_id: &str) -> Option<&Thread> {
        find_thread(self.forum(forum_id)?, thread_id)
    }

    /// Replace the session's forums with the page's current state
    ///
    /// Threads are renumbered positionally, so posts stored as `latest`
    /// or under stale ids become addressable by where they appear.
    pub async fn reload(&mut self) -> Result<(), ForumServiceError> {
        let text = self
            .collaborators
            .pages
            .fetch_page(&self.page_name)
            .await
            .map_err(ForumServiceError::collaborator)?;

        let mut forums = parse_document(&text)?;
        forums.iter_mut().for_each(Forum::renumber);
        self.forums = forums;
        tracing::debug!(
            "Loaded {} forum(s) from '{}'",
            self.forums.len(),
            self.page_name
        );
        Ok(())
    }

    /// Render the page block for the current tree
    pub fn render(&self) -> String {
        serialize_document(
            &self.forums,
            &self.collaborators.identity.current_user(),
            self.collaborators.clock.now(),
        )
    }

    /// Replace the content of an existing thread
    pub async fn update_thread(
        &mut self,
        forum_id: u32,
        thread_id: &str,
        content: &str,
    ) -> Result<EditOutcome, ForumServiceError> {
        ensure_content(content)?;
        let (user, now) = self.stamp();
        let index = self.forum_index(forum_id)?;

        operations::update_thread(&mut self.forums[index], thread_id, content, &user, &now)
            .inspect_err(|e| tracing::warn!("Update skipped: {}", e))?;

        tracing::info!("Update thread {:?}", (forum_id, thread_id));
        let summary = self
            .config
            .summary(format!("Modify forum#{} > thread#{}", index, thread_id));
        self.submit(summary, None).await
    }

    /// Start a new top-level thread (a reply to the original post)
    pub async fn add_thread(
        &mut self,
        forum_id: u32,
        content: &str,
    ) -> Result<EditOutcome, ForumServiceError> {
        ensure_content(content)?;
        let (user, now) = self.stamp();
        let index = self.forum_index(forum_id)?;

        let forum = &mut self.forums[index];
        let new_id = forum.next_thread_id();
        operations::add_thread(forum, Some(new_id.clone()), content, &user, &now);

        tracing::info!("Add thread {:?}", (forum_id, new_id.as_str()));
        let summary = self.config.summary(format!("Add thread to forum#{}", index));
        self.submit(summary, Some(new_id)).await
    }

    /// Reply to a thread; replies to the original post become new threads
    pub async fn add_reply(
        &mut self,
        forum_id: u32,
        thread_id: &str,
        content: &str,
    ) -> Result<EditOutcome, ForumServiceError> {
        if ThreadId::from(thread_id).is_root() {
            return self.add_thread(forum_id, content).await;
        }

        ensure_content(content)?;
        let (user, now) = self.stamp();
        let index = self.forum_index(forum_id)?;

        let forum = &mut self.forums[index];
        let new_id = find_thread(forum, thread_id).and_then(Thread::next_child_id);
        if let Some(id) = new_id.as_ref().filter(|id| id.is_complex(self.config.max_reply_depth)) {
            tracing::warn!(
                "Reply {} nests deeper than {} levels",
                id,
                self.config.max_reply_depth
            );
        }

        operations::add_reply(forum, thread_id, new_id.clone(), content, &user, &now)
            .inspect_err(|e| tracing::warn!("Reply skipped: {}", e))?;

        tracing::info!("Add reply {:?}", (forum_id, thread_id));
        let summary = self.config.summary(format!(
            "Add reply to forum#{} > thread#{}",
            index, thread_id
        ));
        self.submit(summary, new_id).await
    }

    /// Render and submit the current tree, reloading on success
    pub async fn submit_edit(&mut self, summary: &str) -> Result<EditOutcome, ForumServiceError> {
        self.submit(summary.to_string(), None).await
    }

    async fn submit(
        &mut self,
        summary: String,
        new_thread_id: Option<ThreadId>,
    ) -> Result<EditOutcome, ForumServiceError> {
        let request = EditRequest {
            title: self.page_name.clone(),
            text: self.render(),
            summary: summary.clone(),
        };

        let response = self
            .collaborators
            .submitter
            .submit_edit(request)
            .await
            .map_err(|e| {
                tracing::error!("Edit submission for '{}' failed: {}", self.page_name, e);
                ForumServiceError::collaborator(e)
            })?;

        if !response.is_success() {
            let err = ForumServiceError::submission_failed(response.errors);
            tracing::error!("{}", err);
            return Err(err);
        }

        tracing::info!("Forum update on '{}' succeeded: {}", self.page_name, summary);

        let reloaded = self.config.reload_after_submit;
        if reloaded {
            self.reload().await?;
        }

        Ok(EditOutcome {
            summary,
            new_thread_id,
            reloaded,
        })
    }

    /// Acting user and current timestamp for new metadata
    fn stamp(&self) -> (String, String) {
        (
            self.collaborators.identity.current_user(),
            format_timestamp(self.collaborators.clock.now()),
        )
    }

    fn forum_index(&self, forum_id: u32) -> Result<usize, ForumOperationError> {
        forum_id
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .filter(|index| *index < self.forums.len())
            .ok_or_else(|| ForumOperationError::forum_not_found(forum_id, self.forums.len()))
    }
}

fn ensure_content(content: &str) -> Result<(), ForumServiceError> {
    if content.is_empty() {
        return Err(ForumServiceError::EmptyContent);
    }
    Ok(())
}

// Include tests
#[cfg(test)]
#[path = "edit_session_test.rs"]
mod edit_session_test;
