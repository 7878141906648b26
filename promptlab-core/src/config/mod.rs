//! Configuration module
//!
//! Loads `promptlab.toml`, holds the fixed model catalogue, and resolves
//! per-provider credentials.

pub mod api_keys;
pub mod constants;
pub mod loader;
pub mod models;

pub use api_keys::{ApiKeySources, Credential, get_api_key, load_dotenv, load_dotenv_from};
pub use loader::{ConfigManager, DispatchConfig, PromptLabConfig, ProviderSettings};
pub use models::{ModelConfig, ModelId, ModelParseError, Provider};
