//! Provider abstraction for single-turn text generation
//!
//! Both supported APIs take a system instruction plus one user message and
//! return a list of choices (OpenAI) or content blocks (Anthropic). Only the
//! text of the first one is kept; usage, finish reason, and extra candidates
//! are discarded.
//!
//! ## Role Mapping
//!
//! - **OpenAI**: the system instruction is sent as a leading `system` message.
//! - **Anthropic**: the system instruction goes in the top-level `system`
//!   field, and `messages` carries only the user turn.

use crate::config::constants::message_roles;
use async_trait::async_trait;

/// Universal LLM request structure
#[derive(Debug, Clone)]
pub struct LLMRequest {
    pub messages: Vec<Message>,
    pub system_prompt: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Universal message structure
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(content: String) -> Self {
        Self {
            role: MessageRole::User,
            content,
        }
    }

    /// Create a system message
    pub fn system(content: String) -> Self {
        Self {
            role: MessageRole::System,
            content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => message_roles::SYSTEM,
            MessageRole::User => message_roles::USER,
        }
    }
}

/// Text of the first returned choice or content block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LLMResponse {
    pub content: String,
}

/// Universal LLM provider trait
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Provider name ("openai" or "anthropic")
    fn name(&self) -> &str;

    /// Issue exactly one request and extract the first text result
    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError>;

    /// Get supported models
    fn supported_models(&self) -> Vec<String>;

    /// Validate request for this provider
    fn validate_request(&self, request: &LLMRequest) -> Result<(), LLMError> {
        if request.messages.is_empty() {
            return Err(LLMError::InvalidRequest(
                "Messages cannot be empty".to_string(),
            ));
        }

        if !self.supported_models().contains(&request.model) {
            return Err(LLMError::InvalidRequest(format!(
                "Unsupported model: {}",
                request.model
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LLMError {
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Provider error: {0}")]
    Provider(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl LLMError {
    /// Classify a non-success HTTP status and its body
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = format!("HTTP {}: {}", status, extract_error_message(body));
        let lowered = body.to_lowercase();
        if status.as_u16() == 429
            || lowered.contains("insufficient_quota")
            || lowered.contains("rate limit")
        {
            LLMError::RateLimit(detail)
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            LLMError::Authentication(detail)
        } else {
            LLMError::Provider(detail)
        }
    }
}

/// Pull `error.message` out of a JSON error body, or return the body as-is
///
/// Both providers wrap failures as `{"error": {"message": ...}}`.
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(|m| m.to_string())
        })
        .unwrap_or_else(|| body.trim().to_string())
}
