//! File-backed page store
//!
//! Stands in for the wiki when editing a page saved to disk. Every page
//! title resolves to the same file, so one store holds exactly one page.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use wikiforum_core::services::{EditRequest, EditResponse, EditSubmitter, PageSource};

#[derive(Debug, Clone)]
pub struct FilePageStore {
    path: PathBuf,
}

impl FilePageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Page title derived from the file name (`Talk_Main.wiki` → `Talk_Main`)
    pub fn title(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Write through a sibling temp file so a failed write leaves the page intact
    async fn write_atomic(&self, text: &str) -> Result<()> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, text)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

#[async_trait]
impl PageSource for FilePageStore {
    async fn fetch_page(&self, title: &str) -> Result<String> {
        tracing::debug!("Reading page '{}' from {}", title, self.path.display());
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))
    }
}

#[async_trait]
impl EditSubmitter for FilePageStore {
    async fn submit_edit(&self, request: EditRequest) -> Result<EditResponse> {
        self.write_atomic(&request.text).await?;
        tracing::info!(
            "Saved '{}' to {} ({})",
            request.title,
            self.path.display(),
            request.summary
        );
        Ok(EditResponse::success())
    }
}
