use crate::config::constants::{defaults, urls};
use crate::config::models::{ModelConfig, ModelId, Provider};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Per-provider settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderSettings {
    /// Model name; must be one of the provider's advertised models
    pub model: String,

    /// API base URL (override for proxies and tests)
    pub base_url: String,

    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl ProviderSettings {
    fn defaults_for(provider: Provider) -> Self {
        let base_url = match provider {
            Provider::OpenAI => urls::OPENAI_API_BASE,
            Provider::Anthropic => urls::ANTHROPIC_API_BASE,
        };
        Self {
            model: provider.default_model().as_str().to_string(),
            base_url: base_url.to_string(),
            api_key_env: provider.default_api_key_env().to_string(),
        }
    }
}

fn default_openai() -> ProviderSettings {
    ProviderSettings::defaults_for(Provider::OpenAI)
}
fn default_anthropic() -> ProviderSettings {
    ProviderSettings::defaults_for(Provider::Anthropic)
}

/// Sampling and dispatch behaviour shared by both providers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DispatchConfig {
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// System instruction sent with every request
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Send the two providers' requests concurrently when comparing
    #[serde(default = "default_concurrent")]
    pub concurrent: bool,
}

fn default_temperature() -> f64 {
    defaults::DEFAULT_TEMPERATURE
}
fn default_max_tokens() -> u32 {
    defaults::DEFAULT_MAX_TOKENS
}
fn default_system_prompt() -> String {
    defaults::DEFAULT_SYSTEM_PROMPT.to_string()
}
fn default_concurrent() -> bool {
    defaults::DEFAULT_CONCURRENT_DISPATCH
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            system_prompt: default_system_prompt(),
            concurrent: default_concurrent(),
        }
    }
}

/// Main configuration structure, mirrored by `promptlab.toml`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PromptLabConfig {
    #[serde(default = "default_openai")]
    pub openai: ProviderSettings,

    #[serde(default = "default_anthropic")]
    pub anthropic: ProviderSettings,

    #[serde(default)]
    pub dispatch: DispatchConfig,
}

impl Default for PromptLabConfig {
    fn default() -> Self {
        Self {
            openai: default_openai(),
            anthropic: default_anthropic(),
            dispatch: DispatchConfig::default(),
        }
    }
}

impl PromptLabConfig {
    pub fn provider(&self, provider: Provider) -> &ProviderSettings {
        match provider {
            Provider::OpenAI => &self.openai,
            Provider::Anthropic => &self.anthropic,
        }
    }

    pub fn provider_mut(&mut self, provider: Provider) -> &mut ProviderSettings {
        match provider {
            Provider::OpenAI => &mut self.openai,
            Provider::Anthropic => &mut self.anthropic,
        }
    }

    /// Validated model selection for a provider
    pub fn model_config(&self, provider: Provider) -> Result<ModelConfig> {
        let model = &self.provider(provider).model;
        ModelConfig::parse(provider, model)
            .with_context(|| format!("Invalid {} model in configuration", provider.display_name()))
    }

    /// Check every model name before any request is built
    pub fn validate(&self) -> Result<()> {
        for provider in Provider::all_providers() {
            self.model_config(provider)?;
        }
        Ok(())
    }

    /// Write a default configuration file into `workspace`
    ///
    /// Returns the written path, or `None` when a file exists and `force` is off.
    pub fn bootstrap_project<P: AsRef<Path>>(workspace: P, force: bool) -> Result<Option<PathBuf>> {
        let config_path = workspace.as_ref().join(defaults::CONFIG_FILE_NAME);
        if config_path.exists() && !force {
            return Ok(None);
        }
        Self::create_sample_config(&config_path)?;
        Ok(Some(config_path))
    }

    /// Create sample configuration file
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let default_config = PromptLabConfig::default();
        let config_content = toml::to_string_pretty(&default_config)
            .context("Failed to serialize default configuration")?;

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }
}

/// Configuration manager for loading and validating configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: PromptLabConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Load configuration from a specific workspace
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let config_path = workspace.join(defaults::CONFIG_FILE_NAME);
        if config_path.exists() {
            return Self::load_from_file(&config_path);
        }

        let fallback_path = workspace
            .join(defaults::CONFIG_DIR_NAME)
            .join(defaults::CONFIG_FILE_NAME);
        if fallback_path.exists() {
            return Self::load_from_file(&fallback_path);
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config_path = home_dir
                .join(defaults::CONFIG_DIR_NAME)
                .join(defaults::CONFIG_FILE_NAME);
            if home_config_path.exists() {
                return Self::load_from_file(&home_config_path);
            }
        }

        debug!("no configuration file found, using defaults");
        Ok(Self {
            config: PromptLabConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PromptLabConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &PromptLabConfig {
        &self.config
    }

    /// Apply command-line model overrides, validating them against the catalogue
    pub fn override_model(&mut self, provider: Provider, model: &str) -> Result<()> {
        let parsed = ModelId::from_str(model)
            .map_err(anyhow::Error::from)
            .and_then(|id| ModelConfig::new(provider, id).map_err(anyhow::Error::from))
            .with_context(|| format!("Unsupported {} model", provider.display_name()))?;
        self.config.provider_mut(provider).model = parsed.model().as_str().to_string();
        Ok(())
    }

    pub fn set_concurrent(&mut self, concurrent: bool) {
        self.config.dispatch.concurrent = concurrent;
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_original_constants() {
        let config = PromptLabConfig::default();
        assert_eq!(config.dispatch.temperature, 0.7);
        assert_eq!(config.dispatch.max_tokens, 1000);
        assert_eq!(
            config.dispatch.system_prompt,
            "You are a helpful assistant."
        );
        assert!(!config.dispatch.concurrent);
        assert_eq!(config.openai.model, "gpt-4o");
        assert_eq!(config.anthropic.model, "claude-sonnet-4-20250514");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("promptlab.toml");
        fs::write(
            &path,
            "[openai]\nmodel = \"gpt-4o-mini\"\nbase_url = \"http://localhost:9\"\napi_key_env = \"OPENAI_API_KEY\"\n\n[dispatch]\nconcurrent = true\n",
        )
        .unwrap();

        let manager = ConfigManager::load_from_workspace(dir.path()).unwrap();
        let config = manager.config();
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(config.openai.base_url, "http://localhost:9");
        assert!(config.dispatch.concurrent);
        assert_eq!(config.dispatch.max_tokens, 1000);
        assert_eq!(config.anthropic.base_url, urls::ANTHROPIC_API_BASE);
        assert_eq!(manager.config_path(), Some(path.as_path()));
    }

    #[test]
    fn unknown_model_in_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("promptlab.toml");
        fs::write(
            &path,
            "[anthropic]\nmodel = \"gpt-4o\"\nbase_url = \"x\"\napi_key_env = \"ANTHROPIC_API_KEY\"\n",
        )
        .unwrap();

        assert!(ConfigManager::load_from_file(&path).is_err());
    }

    #[test]
    fn bootstrap_writes_once_unless_forced() {
        let dir = TempDir::new().unwrap();
        let first = PromptLabConfig::bootstrap_project(dir.path(), false).unwrap();
        assert!(first.is_some());
        let second = PromptLabConfig::bootstrap_project(dir.path(), false).unwrap();
        assert!(second.is_none());
        let forced = PromptLabConfig::bootstrap_project(dir.path(), true).unwrap();
        assert!(forced.is_some());

        let written = fs::read_to_string(dir.path().join("promptlab.toml")).unwrap();
        assert!(!written.to_lowercase().contains("sk-"));
        let reloaded: PromptLabConfig = toml::from_str(&written).unwrap();
        assert_eq!(reloaded.dispatch.max_tokens, 1000);
    }

    #[test]
    fn model_override_is_validated() {
        let dir = TempDir::new().unwrap();
        let mut manager = ConfigManager::load_from_workspace(dir.path()).unwrap();
        assert!(manager.override_model(Provider::OpenAI, "gpt-4-turbo").is_ok());
        assert_eq!(manager.config().openai.model, "gpt-4-turbo");
        assert!(
            manager
                .override_model(Provider::OpenAI, "claude-opus-3-5-20241022")
                .is_err()
        );
    }
}
