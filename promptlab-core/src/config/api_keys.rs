//! API key management for retrieving provider credentials from the command
//! line, environment variables, and `.env` files.
//!
//! Credentials are resolved once per invocation and handed explicitly to each
//! dispatch call. They are never read from or written to `promptlab.toml`.

use crate::config::models::Provider;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An opaque bearer credential for one provider
///
/// `Debug` never prints the secret, so a credential can sit inside logged
/// structures without leaking.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw key. Blank keys count as absent.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// Raw key for building the outbound request
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// API key sources for both providers
#[derive(Debug, Clone)]
pub struct ApiKeySources {
    /// OpenAI API key environment variable name
    pub openai_env: String,
    /// Anthropic API key environment variable name
    pub anthropic_env: String,
    /// OpenAI API key given on the command line
    pub openai_cli: Option<String>,
    /// Anthropic API key given on the command line
    pub anthropic_cli: Option<String>,
}

impl Default for ApiKeySources {
    fn default() -> Self {
        Self {
            openai_env: Provider::OpenAI.default_api_key_env().to_string(),
            anthropic_env: Provider::Anthropic.default_api_key_env().to_string(),
            openai_cli: None,
            anthropic_cli: None,
        }
    }
}

impl ApiKeySources {
    fn env_for(&self, provider: Provider) -> &str {
        match provider {
            Provider::OpenAI => &self.openai_env,
            Provider::Anthropic => &self.anthropic_env,
        }
    }

    fn cli_for(&self, provider: Provider) -> Option<&String> {
        match provider {
            Provider::OpenAI => self.openai_cli.as_ref(),
            Provider::Anthropic => self.anthropic_cli.as_ref(),
        }
    }
}

/// Load environment variables from a .env file in the working directory or
/// one of its parents
///
/// Returns the file that was read, or `None` when there is no .env file.
/// Runs before logging is set up, so a `RUST_LOG` in the file takes effect;
/// the caller reports the outcome once the subscriber exists.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    missing_is_none(dotenvy::dotenv())
}

/// Load environment variables from a specific .env file
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    missing_is_none(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn missing_is_none(
    result: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Resolve the credential for a provider
///
/// Priority:
/// 1. explicit command-line value
/// 2. the provider's environment variable (which `.env` may have populated)
///
/// Returns `None` when no non-empty key is available. That is a user-input
/// condition, reported by the dispatcher without touching the network.
pub fn get_api_key(provider: Provider, sources: &ApiKeySources) -> Option<Credential> {
    if let Some(key) = sources.cli_for(provider).cloned().and_then(Credential::new) {
        return Some(key);
    }

    let env_var = sources.env_for(provider);
    match env::var(env_var) {
        Ok(key) => Credential::new(key),
        Err(_) => {
            debug!(%provider, env_var, "no credential in environment");
            None
        }
    }
}
