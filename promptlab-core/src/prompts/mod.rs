//! Prompt builder
//!
//! Pure string templates for the four techniques. Nothing in this module
//! touches the network or any shared state.

pub mod chain;
pub mod techniques;

pub use chain::{
    Brainstorm, ChainStep, DEFAULT_BLOG_TOPIC, Introduction, Outline, PromptChain, chain_step,
};
pub use techniques::{
    Audience, DEFAULT_TOPIC, FewShotTask, ProblemKind, ResponseFormat, advanced, basic,
    chain_of_thought, few_shot,
};

/// A finished prompt plus the optional system instruction sent with it
///
/// Built fresh for every dispatch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    prompt: String,
    system: Option<String>,
}

impl PromptRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
        }
    }

    pub fn with_system(prompt: impl Into<String>, system: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: Some(system.into()),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Explicit system instruction, if one was set
    pub fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }
}
