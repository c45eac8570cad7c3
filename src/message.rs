// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    // A missing field is validated like an empty one.
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    /// Message with surrounding whitespace removed, counting the ASCII
    /// separators U+001C..=U+001F as whitespace too.
    pub fn trimmed(&self) -> &str {
        self.message
            .trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn reply(response: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            response: Some(response.into()),
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Body of a validation failure. Carries no `success` flag.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "healthy".to_string() }
    }
}
