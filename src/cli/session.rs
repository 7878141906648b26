use anyhow::{Context, Result};
use promptlab_core::cli::Cli;
use promptlab_core::config::{ApiKeySources, ConfigManager, Provider, get_api_key};
use promptlab_core::llm::{Comparison, Credentials, Dispatcher, ModelResponse};
use promptlab_core::prompts::PromptRequest;
use promptlab_core::ui::{render, start_loading_spinner};
use tracing::debug;

/// Per-invocation state shared by the dispatching commands
pub struct Session {
    dispatcher: Dispatcher,
    credentials: Credentials,
    dry_run: bool,
}

impl Session {
    /// Load configuration, apply flag overrides, and resolve credentials
    pub fn from_cli(args: &Cli) -> Result<Self> {
        let mut manager = match &args.config {
            Some(path) => ConfigManager::load_from_file(path)?,
            None => ConfigManager::load()?,
        };

        if let Some(model) = &args.openai_model {
            manager.override_model(Provider::OpenAI, model)?;
        }
        if let Some(model) = &args.anthropic_model {
            manager.override_model(Provider::Anthropic, model)?;
        }
        if args.concurrent {
            manager.set_concurrent(true);
        }
        if let Some(path) = manager.config_path() {
            debug!(path = %path.display(), "using configuration file");
        }

        let config = manager.config();
        let sources = ApiKeySources {
            openai_env: config.openai.api_key_env.clone(),
            anthropic_env: config.anthropic.api_key_env.clone(),
            openai_cli: args.openai_key.clone(),
            anthropic_cli: args.anthropic_key.clone(),
        };
        let credentials = Credentials {
            openai: get_api_key(Provider::OpenAI, &sources),
            anthropic: get_api_key(Provider::Anthropic, &sources),
        };

        let dispatcher =
            Dispatcher::from_config(config).context("Failed to prepare model dispatcher")?;

        Ok(Self::new(dispatcher, credentials, args.dry_run))
    }

    pub fn new(dispatcher: Dispatcher, credentials: Credentials, dry_run: bool) -> Self {
        Self {
            dispatcher,
            credentials,
            dry_run,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn concurrent(&self) -> bool {
        self.dispatcher.concurrent()
    }

    /// Send one prompt to one provider behind a spinner
    pub async fn ask(&self, provider: Provider, prompt: &str, busy: &str) -> ModelResponse {
        let spinner = start_loading_spinner(busy);
        let response = self
            .dispatcher
            .dispatch(
                provider,
                self.credentials.get(provider),
                &PromptRequest::new(prompt),
            )
            .await;
        spinner.finish_and_clear();
        response
    }

    /// Send one prompt to both providers behind a single spinner
    pub async fn ask_both(&self, prompt: &str, busy: &str) -> Comparison {
        let spinner = start_loading_spinner(busy);
        let comparison = self
            .dispatcher
            .dispatch_both(&self.credentials, &PromptRequest::new(prompt))
            .await;
        spinner.finish_and_clear();
        comparison
    }

    /// Print one provider's answer under its model header
    pub fn print_response(&self, provider: Provider, response: &ModelResponse) {
        println!(
            "{}",
            render::response_block(&self.dispatcher.model(provider), response)
        );
    }
}
