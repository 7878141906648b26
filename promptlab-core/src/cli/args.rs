//! CLI argument parsing

use crate::config::constants::defaults;
use crate::config::models::Provider;
use crate::prompts::{Audience, FewShotTask, ProblemKind, ResponseFormat};
use clap::{ColorChoice, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

/// Main CLI structure for promptlab
#[derive(Parser, Debug)]
#[command(
    name = "promptlab",
    version,
    about = "Compare prompt-engineering techniques across OpenAI and Anthropic models\n\nTechniques:\n• Basic vs advanced prompts\n• Few-shot learning\n• Prompt chaining\n• Chain-of-thought reasoning\n\nQuick Start:\n  export OPENAI_API_KEY=\"your_key\"\n  export ANTHROPIC_API_KEY=\"your_key\"\n  promptlab compare --topic recursion",
    color = ColorChoice::Auto
)]
pub struct Cli {
    /// **Configuration file path**
    ///
    /// Default locations: ./promptlab.toml, ./.promptlab/promptlab.toml,
    /// ~/.promptlab/promptlab.toml
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    /// OpenAI API key (falls back to OPENAI_API_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub openai_key: Option<String>,

    /// Anthropic API key (falls back to ANTHROPIC_API_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub anthropic_key: Option<String>,

    /// OpenAI model: gpt-4o (default), gpt-4o-mini, gpt-4-turbo
    #[arg(long, global = true, value_name = "MODEL")]
    pub openai_model: Option<String>,

    /// Anthropic model: claude-sonnet-4-20250514 (default),
    /// claude-sonnet-3-5-20241022, claude-opus-3-5-20241022
    #[arg(long, global = true, value_name = "MODEL")]
    pub anthropic_model: Option<String>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = defaults::DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Query both providers at the same time when comparing
    #[arg(long, global = true)]
    pub concurrent: bool,

    /// Print the built prompts without sending anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// **Basic vs advanced prompts** on both providers
    ///
    /// Sends "Explain {topic}" and a structured prompt with audience and
    /// format to OpenAI and Anthropic, then prints all four answers.
    ///
    /// Example: promptlab compare --topic recursion --audience non-technical-manager
    Compare {
        /// Topic for the basic prompt
        #[arg(long, default_value = crate::prompts::DEFAULT_TOPIC)]
        topic: String,

        /// Topic for the advanced prompt (defaults to --topic)
        #[arg(long)]
        advanced_topic: Option<String>,

        /// Target audience for the advanced prompt
        #[arg(long, value_enum, default_value_t = Audience::default())]
        audience: Audience,

        /// Response format for the advanced prompt
        #[arg(long, value_enum, default_value_t = ResponseFormat::default())]
        format: ResponseFormat,
    },

    /// **Few-shot learning** with built-in worked examples
    ///
    /// Example: promptlab few-shot --task sentiment-analysis --input "fine I guess"
    FewShot {
        /// Task whose examples are prepended
        #[arg(long, value_enum, default_value_t = FewShotTask::default())]
        task: FewShotTask,

        /// Text to classify or transform (defaults to a sample for the task)
        #[arg(long)]
        input: Option<String>,
    },

    /// **Prompt chaining**: brainstorm, outline, then introduction
    ///
    /// Each step receives the previous step's output.
    ///
    /// Example: promptlab chain --topic "The future of remote work"
    Chain {
        /// Blog post topic
        #[arg(long, default_value = crate::prompts::DEFAULT_BLOG_TOPIC)]
        topic: String,

        /// Provider that runs the chain
        #[arg(long, value_enum, default_value_t = ProviderArg::Anthropic)]
        provider: ProviderArg,
    },

    /// **Chain-of-thought reasoning** on a word problem, puzzle, or decision
    ///
    /// Example: promptlab reason --kind logic-puzzle --provider both
    Reason {
        /// Kind of problem
        #[arg(long, value_enum, default_value_t = ProblemKind::default())]
        kind: ProblemKind,

        /// Problem statement (defaults to a sample for the kind)
        #[arg(long)]
        problem: Option<String>,

        /// Provider(s) to ask
        #[arg(long, value_enum, default_value_t = ReasonTarget::Both)]
        provider: ReasonTarget,
    },

    /// List the supported models for each provider
    Models,

    /// Write a default promptlab.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print key takeaways and further reading
    Tips,
}

/// Single-provider selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Openai,
    Anthropic,
}

impl From<ProviderArg> for Provider {
    fn from(value: ProviderArg) -> Self {
        match value {
            ProviderArg::Openai => Provider::OpenAI,
            ProviderArg::Anthropic => Provider::Anthropic,
        }
    }
}

/// Provider selector that also allows both
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReasonTarget {
    Openai,
    Anthropic,
    Both,
}

impl ReasonTarget {
    /// Providers to query, in display order
    pub fn providers(&self) -> Vec<Provider> {
        match self {
            ReasonTarget::Openai => vec![Provider::OpenAI],
            ReasonTarget::Anthropic => vec![Provider::Anthropic],
            ReasonTarget::Both => Provider::all_providers(),
        }
    }
}

impl Cli {
    /// Effective `tracing` filter directive
    pub fn log_filter(&self) -> String {
        std::env::var("RUST_LOG").unwrap_or_else(|_| self.log_level.clone())
    }
}
