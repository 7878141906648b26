//! # LLM Integration Layer
//!
//! One adapter per provider behind the [`LLMProvider`] trait, and a
//! [`Dispatcher`] that picks the adapter, applies the shared sampling
//! settings, and folds every outcome into a [`ModelResponse`].
//!
//! ## Supported Providers
//!
//! | Provider | Endpoint | Models |
//! |----------|----------|--------|
//! | OpenAI | `/chat/completions` | gpt-4o, gpt-4o-mini, gpt-4-turbo |
//! | Anthropic | `/messages` | claude-sonnet-4-20250514, claude-sonnet-3-5-20241022, claude-opus-3-5-20241022 |
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use promptlab_core::config::{Credential, PromptLabConfig, Provider};
//! use promptlab_core::llm::Dispatcher;
//! use promptlab_core::prompts::{PromptRequest, basic};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let dispatcher = Dispatcher::from_config(&PromptLabConfig::default())?;
//! let key = Credential::new(std::env::var("OPENAI_API_KEY")?);
//! let response = dispatcher
//!     .dispatch(Provider::OpenAI, key.as_ref(), &PromptRequest::new(basic("Python")))
//!     .await;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

pub mod dispatch;
pub mod error_display;
pub mod factory;
pub mod provider;
pub mod providers;

pub use dispatch::{
    ChainObserver, ChainRecord, ChainStepRecord, Comparison, Credentials, DispatchErrorKind,
    Dispatcher, Endpoint, ModelResponse,
};
pub use factory::{ProviderConfig, create_provider};
pub use provider::{LLMError, LLMProvider, LLMRequest, LLMResponse, Message, MessageRole};
pub use providers::{AnthropicProvider, OpenAIProvider};
