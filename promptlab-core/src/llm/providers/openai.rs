use crate::config::api_keys::Credential;
use crate::config::constants::{models, urls};
use crate::llm::provider::{LLMError, LLMProvider, LLMRequest, LLMResponse, MessageRole};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::{Value, json};
use tracing::debug;

/// Chat Completions client
pub struct OpenAIProvider {
    api_key: Credential,
    http_client: HttpClient,
    base_url: String,
}

impl OpenAIProvider {
    pub fn new(api_key: Credential) -> Self {
        Self {
            api_key,
            http_client: HttpClient::new(),
            base_url: urls::OPENAI_API_BASE.to_string(),
        }
    }

    pub fn from_config(api_key: Credential, base_url: Option<String>) -> Self {
        let mut provider = Self::new(api_key);
        if let Some(base) = base_url {
            provider.base_url = base.trim_end_matches('/').to_string();
        }
        provider
    }

    fn convert_to_openai_format(&self, request: &LLMRequest) -> Value {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);

        if let Some(system_prompt) = &request.system_prompt {
            messages.push(json!({
                "role": MessageRole::System.as_str(),
                "content": system_prompt
            }));
        }

        for msg in &request.messages {
            messages.push(json!({
                "role": msg.role.as_str(),
                "content": msg.content
            }));
        }

        json!({
            "model": request.model,
            "messages": messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        })
    }

    fn parse_openai_response(&self, response_json: Value) -> Result<LLMResponse, LLMError> {
        let choices = response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .ok_or_else(|| {
                LLMError::MalformedResponse("Invalid response format: missing choices".to_string())
            })?;

        let choice = choices
            .first()
            .ok_or_else(|| LLMError::MalformedResponse("No choices in response".to_string()))?;

        let content = choice
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                LLMError::MalformedResponse(
                    "Invalid response format: missing message content".to_string(),
                )
            })?;

        Ok(LLMResponse {
            content: content.to_string(),
        })
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        self.validate_request(&request)?;
        let openai_request = self.convert_to_openai_format(&request);

        let url = format!("{}/chat/completions", self.base_url);
        debug!(%url, model = %request.model, "sending chat completion request");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "provider returned error status");
            return Err(LLMError::from_status(status, &error_text));
        }

        let openai_response: Value = response
            .json()
            .await
            .map_err(|e| LLMError::MalformedResponse(format!("Failed to parse response: {e}")))?;

        self.parse_openai_response(openai_response)
    }

    fn supported_models(&self) -> Vec<String> {
        models::openai::SUPPORTED_MODELS
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::Message;

    fn provider() -> OpenAIProvider {
        OpenAIProvider::new(Credential::new("sk-test").unwrap())
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let key = Credential::new("k").unwrap();
        let base = Some("http://127.0.0.1:9/v1/".to_string());
        let custom = OpenAIProvider::from_config(key.clone(), base);
        assert_eq!(custom.base_url, "http://127.0.0.1:9/v1");
        let default = OpenAIProvider::from_config(key, None);
        assert_eq!(default.base_url, urls::OPENAI_API_BASE);
    }

    #[test]
    fn system_prompt_leads_the_message_list() {
        let request = LLMRequest {
            messages: vec![Message::user("Explain Python".into())],
            system_prompt: Some("You are a helpful assistant.".into()),
            model: "gpt-4o".into(),
            max_tokens: 1000,
            temperature: 0.7,
        };
        let body = provider().convert_to_openai_format(&request);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(
            body["messages"][0]["content"],
            "You are a helpful assistant."
        );
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Explain Python");
        assert_eq!(body["max_tokens"], 1000);
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn first_choice_is_extracted() {
        let body = json!({
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        });
        let response = provider().parse_openai_response(body).unwrap();
        assert_eq!(response.content, "first");
    }

    #[test]
    fn empty_choices_are_malformed() {
        let err = provider()
            .parse_openai_response(json!({"choices": []}))
            .unwrap_err();
        assert!(matches!(err, LLMError::MalformedResponse(_)));

        let err = provider()
            .parse_openai_response(json!({"choices": [{"message": {"content": null}}]}))
            .unwrap_err();
        assert!(matches!(err, LLMError::MalformedResponse(_)));
    }

    #[test]
    fn unsupported_model_is_rejected_before_sending() {
        let request = LLMRequest {
            messages: vec![Message::user("hi".into())],
            system_prompt: None,
            model: "claude-sonnet-4-20250514".into(),
            max_tokens: 10,
            temperature: 0.7,
        };
        assert!(provider().validate_request(&request).is_err());
    }
}
