//! In-memory wiki
//!
//! A page store implementing both [`PageSource`] and [`EditSubmitter`],
//! for tests and offline tooling. Submissions are recorded, and a failure
//! can be queued to exercise rejected-edit handling.

use crate::services::collaborators::{
    EditErrorInfo, EditRequest, EditResponse, EditSubmitter, PageSource,
};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Default)]
pub struct InMemoryWiki {
    pages: RwLock<HashMap<String, String>>,
    submissions: Mutex<Vec<EditRequest>>,
    pending_failure: Mutex<Option<Vec<EditErrorInfo>>>,
}

impl InMemoryWiki {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wiki holding a single page
    pub fn with_page(title: impl Into<String>, text: impl Into<String>) -> Self {
        let mut pages = HashMap::new();
        pages.insert(title.into(), text.into());
        Self {
            pages: RwLock::new(pages),
            ..Default::default()
        }
    }

    pub async fn page(&self, title: &str) -> Option<String> {
        self.pages.read().await.get(title).cloned()
    }

    pub async fn set_page(&self, title: impl Into<String>, text: impl Into<String>) {
        self.pages.write().await.insert(title.into(), text.into());
    }

    /// Every edit accepted or rejected so far, oldest first
    pub async fn submissions(&self) -> Vec<EditRequest> {
        self.submissions.lock().await.clone()
    }

    /// Reject the next submission with the given errors
    pub async fn fail_next_submission(&self, errors: Vec<EditErrorInfo>) {
        *self.pending_failure.lock().await = Some(errors);
    }
}

#[async_trait]
impl PageSource for InMemoryWiki {
    async fn fetch_page(&self, title: &str) -> Result<String> {
        self.page(title)
            .await
            .ok_or_else(|| anyhow!("Page '{}' does not exist", title))
    }
}

#[async_trait]
impl EditSubmitter for InMemoryWiki {
    async fn submit_edit(&self, request: EditRequest) -> Result<EditResponse> {
        self.submissions.lock().await.push(request.clone());

        if let Some(errors) = self.pending_failure.lock().await.take() {
            return Ok(EditResponse::failure(errors));
        }

        self.set_page(request.title, request.text).await;
        Ok(EditResponse::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_missing_page() {
        let wiki = InMemoryWiki::new();
        let err = tokio_test::block_on(wiki.fetch_page("Nope")).unwrap_err();
        assert_eq!(err.to_string(), "Page 'Nope' does not exist");
    }

    #[tokio::test]
    async fn test_submit_stores_page() {
        let wiki = InMemoryWiki::with_page("Talk:A", "old");

        let response = wiki
            .submit_edit(EditRequest {
                title: "Talk:A".to_string(),
                text: "new".to_string(),
                summary: "s".to_string(),
            })
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(wiki.fetch_page("Talk:A").await.unwrap(), "new");
        assert_eq!(wiki.submissions().await.len(), 1);
    }

    #[tokio::test]
    async fn test_queued_failure_applies_once() {
        let wiki = InMemoryWiki::with_page("Talk:A", "old");
        wiki.fail_next_submission(vec![EditErrorInfo::new("readonly", "Wiki is read-only")])
            .await;

        let request = EditRequest {
            title: "Talk:A".to_string(),
            text: "new".to_string(),
            summary: "s".to_string(),
        };

        let first = wiki.submit_edit(request.clone()).await.unwrap();
        assert!(!first.is_success());
        assert_eq!(wiki.page("Talk:A").await.as_deref(), Some("old"));

        let second = wiki.submit_edit(request).await.unwrap();
        assert!(second.is_success());
        assert_eq!(wiki.page("Talk:A").await.as_deref(), Some("new"));
    }
}
