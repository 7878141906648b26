//! Terminal styling for dispatch outcomes
//!
//! Styling goes through `console`, which drops ANSI codes when stdout is not a
//! terminal, so piped output stays plain.

use crate::config::models::Provider;
use console::style;

/// Get a styled error message
pub fn style_llm_error(message: &str) -> String {
    style(message).red().to_string()
}

/// Get a styled warning message
pub fn style_llm_warning(message: &str) -> String {
    style(message).yellow().to_string()
}

/// Get a styled success message
pub fn style_llm_success(message: &str) -> String {
    style(message).green().to_string()
}

/// Provider name styled in the provider's colour
pub fn style_provider_name(provider: Provider) -> String {
    let name = provider.display_name();
    match provider {
        Provider::OpenAI => style(name).yellow().bold().to_string(),
        Provider::Anthropic => style(name).magenta().bold().to_string(),
    }
}

/// Format an LLM error for display
pub fn format_llm_error(provider: Provider, error: &str) -> String {
    format!(
        "{} {}",
        style_provider_name(provider),
        style_llm_error(error)
    )
}

/// Format an LLM warning for display
pub fn format_llm_warning(provider: Provider, warning: &str) -> String {
    format!(
        "{} {}",
        style_provider_name(provider),
        style_llm_warning(warning)
    )
}

/// Format an LLM success message for display
pub fn format_llm_success(provider: Provider, message: &str) -> String {
    format!(
        "{} {}",
        style_provider_name(provider),
        style_llm_success(message)
    )
}
