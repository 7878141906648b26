//! Model dispatcher
//!
//! Turns a [`PromptRequest`] into exactly one provider call and folds every
//! outcome into a [`ModelResponse`]. Nothing fails past this boundary: a
//! missing key, a transport error, and a bad payload all come back as
//! [`ModelResponse::Failed`] values the caller can render or branch on.

use crate::config::api_keys::Credential;
use crate::config::constants::markers;
use crate::config::loader::{DispatchConfig, PromptLabConfig};
use crate::config::models::{ModelConfig, Provider};
use crate::llm::factory::{ProviderConfig, create_provider};
use crate::llm::provider::{LLMError, LLMRequest, Message};
use crate::prompts::{Brainstorm, ChainStep, Introduction, Outline, PromptChain, PromptRequest};
use anyhow::Result;
use std::fmt;
use tracing::{debug, info, warn};

/// Why a dispatch produced no text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchErrorKind {
    /// No key was supplied; no request was sent
    MissingCredential,
    Authentication,
    RateLimit,
    Network,
    MalformedResponse,
    InvalidRequest,
    Provider,
}

impl DispatchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchErrorKind::MissingCredential => "missing_credential",
            DispatchErrorKind::Authentication => "authentication",
            DispatchErrorKind::RateLimit => "rate_limit",
            DispatchErrorKind::Network => "network",
            DispatchErrorKind::MalformedResponse => "malformed_response",
            DispatchErrorKind::InvalidRequest => "invalid_request",
            DispatchErrorKind::Provider => "provider",
        }
    }
}

impl fmt::Display for DispatchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&LLMError> for DispatchErrorKind {
    fn from(err: &LLMError) -> Self {
        match err {
            LLMError::Authentication(_) => DispatchErrorKind::Authentication,
            LLMError::RateLimit(_) => DispatchErrorKind::RateLimit,
            LLMError::Network(_) => DispatchErrorKind::Network,
            LLMError::MalformedResponse(_) => DispatchErrorKind::MalformedResponse,
            LLMError::InvalidRequest(_) => DispatchErrorKind::InvalidRequest,
            LLMError::Provider(_) => DispatchErrorKind::Provider,
        }
    }
}

/// Outcome of one dispatch
///
/// `Display` renders the text itself on success, a warning line when the key
/// was missing, and an `❌ Error:` line for anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelResponse {
    Text(String),
    Failed {
        provider: Provider,
        kind: DispatchErrorKind,
        message: String,
    },
}

impl ModelResponse {
    fn missing_credential(provider: Provider) -> Self {
        ModelResponse::Failed {
            provider,
            kind: DispatchErrorKind::MissingCredential,
            message: format!("Please enter your {} API key.", provider.display_name()),
        }
    }

    fn from_error(provider: Provider, err: &LLMError) -> Self {
        ModelResponse::Failed {
            provider,
            kind: DispatchErrorKind::from(err),
            message: err.to_string(),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            ModelResponse::Text(text) => Some(text),
            ModelResponse::Failed { .. } => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ModelResponse::Text(_))
    }

    pub fn error_kind(&self) -> Option<DispatchErrorKind> {
        match self {
            ModelResponse::Text(_) => None,
            ModelResponse::Failed { kind, .. } => Some(*kind),
        }
    }
}

impl fmt::Display for ModelResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelResponse::Text(text) => f.write_str(text),
            ModelResponse::Failed {
                kind: DispatchErrorKind::MissingCredential,
                message,
                ..
            } => write!(f, "{} {message}", markers::WARNING),
            ModelResponse::Failed { message, .. } => write!(f, "{} {message}", markers::ERROR),
        }
    }
}

/// Credentials for one invocation, passed into each dispatch
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub openai: Option<Credential>,
    pub anthropic: Option<Credential>,
}

impl Credentials {
    pub fn get(&self, provider: Provider) -> Option<&Credential> {
        match provider {
            Provider::OpenAI => self.openai.as_ref(),
            Provider::Anthropic => self.anthropic.as_ref(),
        }
    }
}

/// Where one provider's requests go
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub model: ModelConfig,
    pub base_url: String,
}

/// Results of sending one prompt to both providers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub openai: ModelResponse,
    pub anthropic: ModelResponse,
}

impl Comparison {
    /// Results in display order: OpenAI, then Anthropic
    pub fn in_order(&self) -> [(Provider, &ModelResponse); 2] {
        [
            (Provider::OpenAI, &self.openai),
            (Provider::Anthropic, &self.anthropic),
        ]
    }
}

/// Callbacks fired while a chain runs, used for progress display
pub trait ChainObserver {
    fn step_started(&mut self, _step: ChainStep, _prompt: &str) {}
    fn step_finished(&mut self, _step: ChainStep, _response: &ModelResponse) {}
}

impl ChainObserver for () {}

/// One executed chain step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainStepRecord {
    pub step: ChainStep,
    pub prompt: String,
    pub response: ModelResponse,
}

/// Steps executed by [`Dispatcher::run_chain`], in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainRecord {
    pub steps: Vec<ChainStepRecord>,
}

impl ChainRecord {
    /// True when all three steps produced text
    pub fn completed(&self) -> bool {
        self.steps.len() == ChainStep::ALL.len() && self.steps.iter().all(|s| s.response.is_text())
    }

    pub fn failure(&self) -> Option<&ChainStepRecord> {
        self.steps.iter().find(|s| !s.response.is_text())
    }

    /// Final introduction, if the chain got that far
    pub fn introduction(&self) -> Option<Introduction> {
        self.steps
            .iter()
            .find(|s| s.step == ChainStep::Introduction)
            .and_then(|s| s.response.text())
            .map(|text| Introduction(text.to_string()))
    }
}

/// Sends prompts to the configured providers
#[derive(Debug, Clone)]
pub struct Dispatcher {
    settings: DispatchConfig,
    openai: Endpoint,
    anthropic: Endpoint,
}

impl Dispatcher {
    pub fn new(settings: DispatchConfig, openai: Endpoint, anthropic: Endpoint) -> Self {
        Self {
            settings,
            openai,
            anthropic,
        }
    }

    /// Build from a loaded configuration, validating both model names
    pub fn from_config(config: &PromptLabConfig) -> Result<Self> {
        let endpoint = |provider: Provider| -> Result<Endpoint> {
            Ok(Endpoint {
                model: config.model_config(provider)?,
                base_url: config.provider(provider).base_url.clone(),
            })
        };
        Ok(Self::new(
            config.dispatch.clone(),
            endpoint(Provider::OpenAI)?,
            endpoint(Provider::Anthropic)?,
        ))
    }

    pub fn concurrent(&self) -> bool {
        self.settings.concurrent
    }

    pub fn endpoint(&self, provider: Provider) -> &Endpoint {
        match provider {
            Provider::OpenAI => &self.openai,
            Provider::Anthropic => &self.anthropic,
        }
    }

    pub fn model(&self, provider: Provider) -> ModelConfig {
        self.endpoint(provider).model
    }

    fn build_request(&self, model: &ModelConfig, request: &PromptRequest) -> LLMRequest {
        let system = request
            .system()
            .unwrap_or(&self.settings.system_prompt)
            .to_string();
        LLMRequest {
            messages: vec![Message::user(request.prompt().to_string())],
            system_prompt: Some(system),
            model: model.model().as_str().to_string(),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }

    /// Send one prompt to one provider
    ///
    /// Without a credential this returns immediately and sends nothing.
    pub async fn dispatch(
        &self,
        provider: Provider,
        credential: Option<&Credential>,
        request: &PromptRequest,
    ) -> ModelResponse {
        let Some(credential) = credential else {
            debug!(%provider, "no credential supplied, skipping request");
            return ModelResponse::missing_credential(provider);
        };

        let endpoint = self.endpoint(provider);
        let llm_request = self.build_request(&endpoint.model, request);
        info!(
            %provider,
            model = %endpoint.model.model(),
            prompt_chars = request.prompt().chars().count(),
            "dispatching prompt"
        );

        let client = create_provider(
            ProviderConfig::new(endpoint.model, credential.clone())
                .with_base_url(endpoint.base_url.clone()),
        );

        match client.generate(llm_request).await {
            Ok(response) => {
                debug!(
                    %provider,
                    response_chars = response.content.chars().count(),
                    "received response"
                );
                ModelResponse::Text(response.content)
            }
            Err(err) => {
                let response = ModelResponse::from_error(provider, &err);
                warn!(
                    %provider,
                    kind = ?response.error_kind(),
                    error = %err,
                    "dispatch failed"
                );
                response
            }
        }
    }

    /// Send one prompt to both providers
    ///
    /// Calls run concurrently when `dispatch.concurrent` is set and one after
    /// the other otherwise. Either way one provider's failure leaves the
    /// other's result untouched.
    pub async fn dispatch_both(
        &self,
        credentials: &Credentials,
        request: &PromptRequest,
    ) -> Comparison {
        let openai_key = credentials.get(Provider::OpenAI);
        let anthropic_key = credentials.get(Provider::Anthropic);
        if self.settings.concurrent {
            let (openai, anthropic) = tokio::join!(
                self.dispatch(Provider::OpenAI, openai_key, request),
                self.dispatch(Provider::Anthropic, anthropic_key, request),
            );
            Comparison { openai, anthropic }
        } else {
            let openai = self.dispatch(Provider::OpenAI, openai_key, request).await;
            let anthropic = self
                .dispatch(Provider::Anthropic, anthropic_key, request)
                .await;
            Comparison { openai, anthropic }
        }
    }

    /// Run brainstorm → outline → introduction against one provider
    ///
    /// Each step sees the previous step's raw text. The chain stops at the
    /// first step that produces no text.
    pub async fn run_chain<O: ChainObserver + ?Sized>(
        &self,
        provider: Provider,
        credential: Option<&Credential>,
        topic: &str,
        observer: &mut O,
    ) -> ChainRecord {
        let chain = PromptChain::new(topic);
        let mut record = ChainRecord::default();

        let prompt = chain.brainstorm_prompt();
        let step = ChainStep::Brainstorm;
        let Some(brainstorm) = self
            .run_step(provider, credential, step, prompt, observer, &mut record)
            .await
        else {
            return record;
        };

        let prompt = chain.outline_prompt(&Brainstorm(brainstorm));
        let step = ChainStep::Outline;
        let Some(outline) = self
            .run_step(provider, credential, step, prompt, observer, &mut record)
            .await
        else {
            return record;
        };

        let prompt = chain.introduction_prompt(&Outline(outline));
        let step = ChainStep::Introduction;
        self.run_step(provider, credential, step, prompt, observer, &mut record)
            .await;
        record
    }

    async fn run_step<O: ChainObserver + ?Sized>(
        &self,
        provider: Provider,
        credential: Option<&Credential>,
        step: ChainStep,
        prompt: String,
        observer: &mut O,
        record: &mut ChainRecord,
    ) -> Option<String> {
        observer.step_started(step, &prompt);
        let response = self
            .dispatch(provider, credential, &PromptRequest::new(prompt.as_str()))
            .await;
        observer.step_finished(step, &response);

        let text = response.text().map(str::to_string);
        if text.is_none() {
            warn!(%provider, step = step.index(), "chain stopped");
        }
        record.steps.push(ChainStepRecord {
            step,
            prompt,
            response,
        });
        text
    }
}
