//! Model configuration and identification module
//!
//! Centralizes the provider and model identifiers so that the rest of the
//! crate never compares raw model strings.

use crate::config::constants::{env, model_helpers, models};
use std::fmt;
use std::str::FromStr;

/// Supported AI model providers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provider {
    /// OpenAI chat completions
    OpenAI,
    /// Anthropic messages
    Anthropic,
}

impl Provider {
    /// Get the default API key environment variable for this provider
    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            Provider::OpenAI => env::OPENAI_API_KEY,
            Provider::Anthropic => env::ANTHROPIC_API_KEY,
        }
    }

    /// Human-facing provider name used in messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::OpenAI => "OpenAI",
            Provider::Anthropic => "Anthropic",
        }
    }

    /// Get all supported providers, in rendering order
    pub fn all_providers() -> Vec<Provider> {
        vec![Provider::OpenAI, Provider::Anthropic]
    }

    pub fn default_model(&self) -> ModelId {
        match self {
            Provider::OpenAI => ModelId::Gpt4o,
            Provider::Anthropic => ModelId::ClaudeSonnet4,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::OpenAI => write!(f, "openai"),
            Provider::Anthropic => write!(f, "anthropic"),
        }
    }
}

impl FromStr for Provider {
    type Err = ModelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAI),
            "anthropic" | "claude" => Ok(Provider::Anthropic),
            _ => Err(ModelParseError::InvalidProvider(s.to_string())),
        }
    }
}

/// Every model the toolkit can be pointed at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelId {
    /// GPT-4o - default OpenAI model
    Gpt4o,
    /// GPT-4o mini
    Gpt4oMini,
    /// GPT-4 Turbo
    Gpt4Turbo,
    /// Claude Sonnet 4 - default Anthropic model
    ClaudeSonnet4,
    /// Claude Sonnet 3.5
    ClaudeSonnet35,
    /// Claude Opus 3.5
    ClaudeOpus35,
}

impl ModelId {
    /// Convert the model identifier to the string sent to the provider API
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Gpt4o => models::openai::GPT_4O,
            ModelId::Gpt4oMini => models::openai::GPT_4O_MINI,
            ModelId::Gpt4Turbo => models::openai::GPT_4_TURBO,
            ModelId::ClaudeSonnet4 => models::anthropic::CLAUDE_SONNET_4_20250514,
            ModelId::ClaudeSonnet35 => models::anthropic::CLAUDE_SONNET_3_5_20241022,
            ModelId::ClaudeOpus35 => models::anthropic::CLAUDE_OPUS_3_5_20241022,
        }
    }

    /// Get the provider for this model
    pub fn provider(&self) -> Provider {
        match self {
            ModelId::Gpt4o | ModelId::Gpt4oMini | ModelId::Gpt4Turbo => Provider::OpenAI,
            ModelId::ClaudeSonnet4 | ModelId::ClaudeSonnet35 | ModelId::ClaudeOpus35 => {
                Provider::Anthropic
            }
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelId::Gpt4o => "GPT-4o",
            ModelId::Gpt4oMini => "GPT-4o mini",
            ModelId::Gpt4Turbo => "GPT-4 Turbo",
            ModelId::ClaudeSonnet4 => "Claude Sonnet 4",
            ModelId::ClaudeSonnet35 => "Claude Sonnet 3.5",
            ModelId::ClaudeOpus35 => "Claude Opus 3.5",
        }
    }

    pub fn all_models() -> Vec<ModelId> {
        vec![
            ModelId::Gpt4o,
            ModelId::Gpt4oMini,
            ModelId::Gpt4Turbo,
            ModelId::ClaudeSonnet4,
            ModelId::ClaudeSonnet35,
            ModelId::ClaudeOpus35,
        ]
    }

    /// Models advertised for a single provider
    pub fn models_for_provider(provider: Provider) -> Vec<ModelId> {
        Self::all_models()
            .into_iter()
            .filter(|model| model.provider() == provider)
            .collect()
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = ModelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all_models()
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| ModelParseError::InvalidModel(s.to_string()))
    }
}

/// A provider paired with one of its advertised models
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelConfig {
    provider: Provider,
    model: ModelId,
}

impl ModelConfig {
    /// Pair a provider with a model, rejecting models from the other catalogue
    pub fn new(provider: Provider, model: ModelId) -> Result<Self, ModelParseError> {
        if model.provider() != provider {
            return Err(ModelParseError::ProviderMismatch {
                provider,
                model: model.as_str().to_string(),
            });
        }
        Ok(Self { provider, model })
    }

    /// Parse a model name against the provider's list
    pub fn parse(provider: Provider, model: &str) -> Result<Self, ModelParseError> {
        if !model_helpers::is_valid(&provider.to_string(), model) {
            return Err(ModelParseError::ProviderMismatch {
                provider,
                model: model.to_string(),
            });
        }
        Self::new(provider, ModelId::from_str(model)?)
    }

    pub fn default_for(provider: Provider) -> Self {
        Self {
            provider,
            model: provider.default_model(),
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn model(&self) -> ModelId {
        self.model
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelParseError {
    #[error("Invalid provider: {0}. Supported providers: openai, anthropic")]
    InvalidProvider(String),
    #[error("Invalid model identifier: {0}")]
    InvalidModel(String),
    #[error("Model '{model}' is not offered for provider '{provider}'")]
    ProviderMismatch { provider: Provider, model: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_string_conversion() {
        assert_eq!(ModelId::Gpt4o.as_str(), "gpt-4o");
        assert_eq!(ModelId::ClaudeOpus35.as_str(), "claude-opus-3-5-20241022");
        assert_eq!(
            "claude-sonnet-3-5-20241022".parse::<ModelId>().unwrap(),
            ModelId::ClaudeSonnet35
        );
        assert!("gpt-5".parse::<ModelId>().is_err());
    }

    #[test]
    fn test_provider_parsing() {
        assert_eq!("OpenAI".parse::<Provider>().unwrap(), Provider::OpenAI);
        assert_eq!(
            "anthropic".parse::<Provider>().unwrap(),
            Provider::Anthropic
        );
        assert!(matches!(
            "gemini".parse::<Provider>(),
            Err(ModelParseError::InvalidProvider(_))
        ));
    }

    #[test]
    fn test_models_for_provider() {
        let openai = ModelId::models_for_provider(Provider::OpenAI);
        assert_eq!(
            openai,
            vec![ModelId::Gpt4o, ModelId::Gpt4oMini, ModelId::Gpt4Turbo]
        );
        let anthropic = ModelId::models_for_provider(Provider::Anthropic);
        assert_eq!(anthropic.len(), 3);
        assert!(anthropic.iter().all(|m| m.provider() == Provider::Anthropic));
    }

    #[test]
    fn model_config_rejects_foreign_models() {
        assert!(ModelConfig::parse(Provider::OpenAI, "gpt-4o-mini").is_ok());
        let err = ModelConfig::parse(Provider::OpenAI, "claude-sonnet-4-20250514").unwrap_err();
        assert!(matches!(err, ModelParseError::ProviderMismatch { .. }));
        let err = ModelConfig::parse(Provider::Anthropic, "not-a-model").unwrap_err();
        assert!(err.to_string().contains("not-a-model"));
    }

    #[test]
    fn default_config_uses_default_model() {
        let config = ModelConfig::default_for(Provider::Anthropic);
        assert_eq!(config.model(), ModelId::ClaudeSonnet4);
        assert_eq!(config.provider(), Provider::Anthropic);
    }
}
