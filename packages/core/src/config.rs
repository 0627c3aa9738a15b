//! Forum editing configuration
//!
//! Settings consumed by [`crate::services::EditSession`]. Values come from
//! a JSON document, from `WIKIFORUM_*` environment variables, or from the
//! defaults below.

use serde::{Deserialize, Serialize};
use std::env;

/// Deepest reply nesting the positional scheme is expected to produce
const MAX_SUPPORTED_REPLY_DEPTH: usize = 32;

/// Environment variable overriding [`ForumConfig::summary_prefix`]
pub const ENV_SUMMARY_PREFIX: &str = "WIKIFORUM_SUMMARY_PREFIX";

/// Environment variable overriding [`ForumConfig::max_reply_depth`]
pub const ENV_MAX_REPLY_DEPTH: &str = "WIKIFORUM_MAX_REPLY_DEPTH";

/// Configuration for forum edit sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForumConfig {
    /// Prefix of every edit summary (e.g. `[WikiForum] Add thread to forum#0`)
    pub summary_prefix: String,

    /// Reply ids nested deeper than this are reported as complex
    pub max_reply_depth: usize,

    /// Re-fetch and re-parse the page after a successful submission
    pub reload_after_submit: bool,
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            summary_prefix: "[WikiForum]".to_string(),
            max_reply_depth: 3,
            reload_after_submit: true,
        }
    }
}

impl ForumConfig {
    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("Invalid forum config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `WIKIFORUM_*` environment variables
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the
    /// `WIKIFORUM_*` keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(prefix) = lookup(ENV_SUMMARY_PREFIX) {
            config.summary_prefix = prefix;
        }

        if let Some(depth) = lookup(ENV_MAX_REPLY_DEPTH) {
            config.max_reply_depth = depth.parse().map_err(|_| {
                format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_MAX_REPLY_DEPTH, depth
                )
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.summary_prefix.trim().is_empty() {
            return Err("summary_prefix cannot be empty".to_string());
        }

        if self.max_reply_depth == 0 {
            return Err("max_reply_depth must be greater than 0".to_string());
        }

        if self.max_reply_depth > MAX_SUPPORTED_REPLY_DEPTH {
            return Err(format!(
                "max_reply_depth cannot exceed {}",
                MAX_SUPPORTED_REPLY_DEPTH
            ));
        }

        Ok(())
    }

    /// Build an edit summary from its description
    pub fn summary(&self, description: impl AsRef<str>) -> String {
        format!("{} {}", self.summary_prefix, description.as_ref())
    }
}
