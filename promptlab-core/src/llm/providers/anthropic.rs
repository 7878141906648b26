use crate::config::api_keys::Credential;
use crate::config::constants::{models, urls};
use crate::llm::provider::{LLMError, LLMProvider, LLMRequest, LLMResponse, MessageRole};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::{Value, json};
use tracing::debug;

/// Messages API client
pub struct AnthropicProvider {
    api_key: Credential,
    http_client: HttpClient,
    base_url: String,
}

impl AnthropicProvider {
    pub fn new(api_key: Credential) -> Self {
        Self {
            api_key,
            http_client: HttpClient::new(),
            base_url: urls::ANTHROPIC_API_BASE.to_string(),
        }
    }

    pub fn from_config(api_key: Credential, base_url: Option<String>) -> Self {
        let mut provider = Self::new(api_key);
        if let Some(base) = base_url {
            provider.base_url = base.trim_end_matches('/').to_string();
        }
        provider
    }

    fn convert_to_anthropic_format(&self, request: &LLMRequest) -> Value {
        // System text travels in its own field, never as a message.
        let messages: Vec<Value> = request
            .messages
            .iter()
            .filter(|msg| msg.role != MessageRole::System)
            .map(|msg| {
                json!({
                    "role": msg.role.as_str(),
                    "content": msg.content
                })
            })
            .collect();

        let mut anthropic_request = json!({
            "model": request.model,
            "messages": messages,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        if let Some(system_prompt) = &request.system_prompt {
            anthropic_request["system"] = json!(system_prompt);
        }

        anthropic_request
    }

    fn parse_anthropic_response(&self, response_json: Value) -> Result<LLMResponse, LLMError> {
        let content = response_json
            .get("content")
            .and_then(|c| c.as_array())
            .ok_or_else(|| {
                LLMError::MalformedResponse("Invalid response format: missing content".to_string())
            })?;

        let first = content.first().ok_or_else(|| {
            LLMError::MalformedResponse("No content blocks in response".to_string())
        })?;

        if first.get("type").and_then(|t| t.as_str()) != Some("text") {
            return Err(LLMError::MalformedResponse(
                "First content block is not text".to_string(),
            ));
        }

        let text = first
            .get("text")
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                LLMError::MalformedResponse("Text block has no text".to_string())
            })?;

        Ok(LLMResponse {
            content: text.to_string(),
        })
    }
}

#[async_trait]
impl LLMProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        self.validate_request(&request)?;
        let anthropic_request = self.convert_to_anthropic_format(&request);
        let url = format!("{}/messages", self.base_url);
        debug!(%url, model = %request.model, "sending messages request");

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", self.api_key.expose())
            .header("anthropic-version", urls::ANTHROPIC_API_VERSION)
            .json(&anthropic_request)
            .send()
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "provider returned error status");
            return Err(LLMError::from_status(status, &error_text));
        }

        let anthropic_response: Value = response
            .json()
            .await
            .map_err(|e| LLMError::MalformedResponse(format!("Failed to parse response: {e}")))?;

        self.parse_anthropic_response(anthropic_response)
    }

    fn supported_models(&self) -> Vec<String> {
        models::anthropic::SUPPORTED_MODELS
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}
