//! Plain-terminal rendering of prompts and model responses

use crate::config::models::{ModelConfig, Provider};
use crate::llm::error_display::{format_llm_error, format_llm_warning, style_provider_name};
use crate::llm::{DispatchErrorKind, ModelResponse};
use console::style;

/// Bold section title with an underline
pub fn section(title: &str) -> String {
    let rule = "─".repeat(title.chars().count());
    format!("{}\n{}", style(title).cyan().bold(), style(rule).dim())
}

/// Built prompt, shown before it is sent
pub fn prompt_preview(label: &str, prompt: &str) -> String {
    let body = prompt
        .lines()
        .map(|line| format!("  {}", style(line).dim()))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n{}", style(format!("{label}:")).bold(), body)
}

/// Heading naming the provider and model a response came from
pub fn response_header(model: &ModelConfig) -> String {
    format!(
        "{} {}",
        style_provider_name(model.provider()),
        style(format!("({})", model.model().display_name())).dim()
    )
}

/// Response body, with failures styled by kind
pub fn response_body(provider: Provider, response: &ModelResponse) -> String {
    match response {
        ModelResponse::Text(text) => text.clone(),
        ModelResponse::Failed {
            kind: DispatchErrorKind::MissingCredential,
            ..
        } => format_llm_warning(provider, &response.to_string()),
        ModelResponse::Failed { .. } => format_llm_error(provider, &response.to_string()),
    }
}

/// Header plus body for one provider's answer
pub fn response_block(model: &ModelConfig, response: &ModelResponse) -> String {
    format!(
        "{}\n{}\n",
        response_header(model),
        response_body(model.provider(), response)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_keep_their_marker_text() {
        console::set_colors_enabled(false);
        let response = ModelResponse::Failed {
            provider: Provider::OpenAI,
            kind: DispatchErrorKind::MissingCredential,
            message: "Please enter your OpenAI API key.".into(),
        };
        let body = response_body(Provider::OpenAI, &response);
        assert!(body.contains("⚠️ Please enter your OpenAI API key."));

        let text = ModelResponse::Text("hello".into());
        assert_eq!(response_body(Provider::Anthropic, &text), "hello");
    }

    #[test]
    fn preview_indents_every_line() {
        console::set_colors_enabled(false);
        let preview = prompt_preview("Prompt", "line one\nline two");
        assert_eq!(preview, "Prompt:\n  line one\n  line two");
    }

    #[test]
    fn header_names_model() {
        console::set_colors_enabled(false);
        let header = response_header(&ModelConfig::default_for(Provider::OpenAI));
        assert!(header.starts_with("OpenAI"));
        assert!(header.contains("GPT-4o"));
    }
}
