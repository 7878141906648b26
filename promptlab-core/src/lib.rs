//! # promptlab-core - Prompt engineering comparison toolkit
//!
//! `promptlab-core` builds prompts for four prompt-engineering techniques and
//! sends them to OpenAI and Anthropic chat models so the answers can be read
//! side by side.
//!
//! ## Highlights
//!
//! - **Prompt Builder**: pure templates for basic vs advanced prompts,
//!   few-shot examples, a three-step blog-writing chain, and chain-of-thought
//!   scaffolds.
//! - **Model Dispatcher**: one adapter per provider, a single request per
//!   call, and every failure folded into a [`ModelResponse`] instead of an
//!   error that escapes.
//! - **Configuration-First**: models, endpoints, and sampling settings come
//!   from `promptlab.toml`; credentials come only from flags or the
//!   environment.
//!
//! ## Architecture Overview
//!
//! - `prompts/`: template builders and the typed chain stages.
//! - `llm/`: provider clients, the factory, and the dispatcher.
//! - `config/`: configuration loader, model catalogue, and credential lookup.
//! - `ui/`: spinner and response rendering for the CLI.
//! - `cli/`: `clap` argument definitions.
//!
//! ## Quickstart
//!
//! ```rust,no_run
//! use promptlab_core::config::{ConfigManager, Provider};
//! use promptlab_core::llm::{Credentials, Dispatcher};
//! use promptlab_core::prompts::{Audience, PromptRequest, ResponseFormat, advanced};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let manager = ConfigManager::load()?;
//!     let dispatcher = Dispatcher::from_config(manager.config())?;
//!     let credentials = Credentials::default();
//!
//!     let prompt = advanced(
//!         "recursion",
//!         Audience::BeginnerProgrammer,
//!         ResponseFormat::ConciseExplanation,
//!     );
//!     let comparison = dispatcher
//!         .dispatch_both(&credentials, &PromptRequest::new(prompt))
//!         .await;
//!     for (provider, response) in comparison.in_order() {
//!         println!("{provider}: {response}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod llm;
pub mod prompts;
pub mod ui;

pub use cli::args::{Cli, Commands};
pub use config::{ConfigManager, Credential, ModelConfig, ModelId, PromptLabConfig, Provider};
pub use llm::{
    ChainRecord, Comparison, Credentials, DispatchErrorKind, Dispatcher, ModelResponse,
};
pub use prompts::{
    Audience, ChainStep, FewShotTask, ProblemKind, PromptChain, PromptRequest, ResponseFormat,
};
