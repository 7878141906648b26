/// Model ID constants for the two supported providers
pub mod models {
    // OpenAI models
    pub mod openai {
        pub const DEFAULT_MODEL: &str = "gpt-4o";
        pub const SUPPORTED_MODELS: &[&str] = &[GPT_4O, GPT_4O_MINI, GPT_4_TURBO];

        // Convenience constants for commonly used models
        pub const GPT_4O: &str = "gpt-4o";
        pub const GPT_4O_MINI: &str = "gpt-4o-mini";
        pub const GPT_4_TURBO: &str = "gpt-4-turbo";
    }

    // Anthropic models
    pub mod anthropic {
        pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
        pub const SUPPORTED_MODELS: &[&str] = &[
            CLAUDE_SONNET_4_20250514,
            CLAUDE_SONNET_3_5_20241022,
            CLAUDE_OPUS_3_5_20241022,
        ];

        pub const CLAUDE_SONNET_4_20250514: &str = "claude-sonnet-4-20250514";
        pub const CLAUDE_SONNET_3_5_20241022: &str = "claude-sonnet-3-5-20241022";
        pub const CLAUDE_OPUS_3_5_20241022: &str = "claude-opus-3-5-20241022";
    }
}

/// Model validation and helper functions
pub mod model_helpers {
    use super::models;

    /// Get supported models for a provider
    pub fn supported_for(provider: &str) -> Option<&'static [&'static str]> {
        match provider {
            "openai" => Some(models::openai::SUPPORTED_MODELS),
            "anthropic" => Some(models::anthropic::SUPPORTED_MODELS),
            _ => None,
        }
    }

    /// Validate if a model is supported by a provider
    pub fn is_valid(provider: &str, model: &str) -> bool {
        supported_for(provider)
            .map(|list| list.iter().any(|m| *m == model))
            .unwrap_or(false)
    }
}

/// Default dispatch values
pub mod defaults {
    pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
    pub const DEFAULT_TEMPERATURE: f64 = 0.7;
    pub const DEFAULT_MAX_TOKENS: u32 = 1_000;
    pub const DEFAULT_CONCURRENT_DISPATCH: bool = false;
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const CONFIG_FILE_NAME: &str = "promptlab.toml";
    pub const CONFIG_DIR_NAME: &str = ".promptlab";
}

/// Environment variables consulted for credentials
pub mod env {
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
}

/// Message role constants to avoid hardcoding strings
pub mod message_roles {
    pub const SYSTEM: &str = "system";
    pub const USER: &str = "user";
}

/// URL constants for API endpoints
pub mod urls {
    pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
    pub const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
    pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";
}

/// Display markers prefixed to non-success dispatch output
pub mod markers {
    pub const WARNING: &str = "⚠️";
    pub const ERROR: &str = "❌ Error:";
}
