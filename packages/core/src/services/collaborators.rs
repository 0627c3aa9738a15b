//! External Collaborator Traits
//!
//! The core never talks to the wiki directly. Page retrieval, edit
//! submission and the acting user's identity are supplied by the host
//! through these traits.
//!
//! # Thread Safety
//!
//! Implementations must be `Send + Sync` so a session can be driven from
//! any tokio task.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Source of raw page text
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the current text of `title`
    async fn fetch_page(&self, title: &str) -> Result<String>;
}

/// Receiver of page edits
#[async_trait]
pub trait EditSubmitter: Send + Sync {
    /// Submit new page text
    ///
    /// Transport failures are returned as `Err`; a rejected edit is an
    /// `Ok` response carrying error descriptors.
    async fn submit_edit(&self, request: EditRequest) -> Result<EditResponse>;
}

/// Identity of the user performing edits
pub trait UserIdentity: Send + Sync {
    fn current_user(&self) -> String;
}

/// A fixed user name
#[derive(Debug, Clone)]
pub struct StaticUser(pub String);

impl StaticUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl UserIdentity for StaticUser {
    fn current_user(&self) -> String {
        self.0.clone()
    }
}

/// Page edit payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRequest {
    pub title: String,
    pub text: String,
    pub summary: String,
}

/// One error reported by the wiki for a rejected edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditErrorInfo {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

impl EditErrorInfo {
    pub fn new(code: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            info: info.into(),
        }
    }
}

impl fmt::Display for EditErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.info.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}: {}", self.code, self.info)
        }
    }
}

/// Outcome reported by the wiki for a submitted edit
///
/// Any error descriptor means the edit was rejected; the descriptors are
/// passed through without further interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditResponse {
    #[serde(default)]
    pub errors: Vec<EditErrorInfo>,
}

impl EditResponse {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn failure(errors: Vec<EditErrorInfo>) -> Self {
        Self { errors }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Read an action-API style response body
    ///
    /// Both the single `error` object and the `errors` array forms are
    /// recognised; anything else counts as success.
    pub fn from_api_json(body: &Value) -> Self {
        let mut errors = Vec::new();

        if let Some(error) = body.get("error") {
            errors.push(error_from_value(error));
        }

        if let Some(list) = body.get("errors").and_then(Value::as_array) {
            errors.extend(list.iter().map(error_from_value));
        }

        Self { errors }
    }
}

fn error_from_value(value: &Value) -> EditErrorInfo {
    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    match value {
        Value::String(message) => EditErrorInfo::new("error", message.clone()),
        _ => {
            let info = match field("info") {
                info if info.is_empty() => field("text"),
                info => info,
            };
            EditErrorInfo::new(field("code"), info)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_api_json_success() {
        let response = EditResponse::from_api_json(&json!({
            "edit": { "result": "Success", "newrevid": 42 }
        }));
        assert!(response.is_success());
    }

    #[test]
    fn test_from_api_json_single_error() {
        let response = EditResponse::from_api_json(&json!({
            "error": { "code": "protectedpage", "info": "This page has been protected" }
        }));

        assert!(!response.is_success());
        assert_eq!(
            response.errors,
            vec![EditErrorInfo::new("protectedpage", "This page has been protected")]
        );
    }

    #[test]
    fn test_from_api_json_error_list() {
        let response = EditResponse::from_api_json(&json!({
            "errors": [
                { "code": "badtoken", "text": "Invalid CSRF token." },
                "plain message"
            ]
        }));

        assert_eq!(response.errors.len(), 2);
        assert_eq!(response.errors[0].to_string(), "badtoken: Invalid CSRF token.");
        assert_eq!(response.errors[1], EditErrorInfo::new("error", "plain message"));
    }

    #[test]
    fn test_static_user() {
        let user = StaticUser::new("Alice");
        assert_eq!(user.current_user(), "Alice");
    }
}
