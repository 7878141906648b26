use super::providers::{AnthropicProvider, OpenAIProvider};
use crate::config::api_keys::Credential;
use crate::config::models::{ModelConfig, Provider};
use crate::llm::provider::LLMProvider;

/// Everything needed to build one provider client
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub model: ModelConfig,
    pub api_key: Credential,
    pub base_url: Option<String>,
}

impl ProviderConfig {
    pub fn new(model: ModelConfig, api_key: Credential) -> Self {
        Self {
            model,
            api_key,
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Create a provider instance for the configured model
///
/// Clients are built per dispatch; nothing is cached between calls.
pub fn create_provider(config: ProviderConfig) -> Box<dyn LLMProvider> {
    let ProviderConfig {
        model,
        api_key,
        base_url,
    } = config;

    match model.provider() {
        Provider::OpenAI => Box::new(OpenAIProvider::from_config(api_key, base_url)),
        Provider::Anthropic => Box::new(AnthropicProvider::from_config(api_key, base_url)),
    }
}
