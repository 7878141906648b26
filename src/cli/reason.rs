use super::Session;
use anyhow::Result;
use promptlab_core::config::Provider;
use promptlab_core::llm::ModelResponse;
use promptlab_core::prompts::{ProblemKind, chain_of_thought};
use promptlab_core::ui::render;

const BUSY: &str = "Reasoning through problem...";

/// Handle the reason command: a chain-of-thought scaffold on the chosen providers
pub async fn handle_reason_command(
    session: &Session,
    kind: ProblemKind,
    problem: &str,
    providers: &[Provider],
) -> Result<()> {
    let prompt = chain_of_thought(kind, problem);

    println!(
        "{}\n",
        render::section(&format!("Chain-of-Thought: {}", kind.title()))
    );
    println!("{}\n", render::prompt_preview("Prompt", &prompt));

    if session.dry_run() {
        return Ok(());
    }

    for (provider, response) in collect_responses(session, &prompt, providers).await {
        session.print_response(provider, &response);
    }

    Ok(())
}

/// Send `prompt` to each selected provider and nothing else
async fn collect_responses(
    session: &Session,
    prompt: &str,
    providers: &[Provider],
) -> Vec<(Provider, ModelResponse)> {
    if session.concurrent() && providers.len() > 1 {
        let comparison = session.ask_both(prompt, BUSY).await;
        return comparison
            .in_order()
            .into_iter()
            .map(|(provider, response)| (provider, response.clone()))
            .collect();
    }

    let mut responses = Vec::with_capacity(providers.len());
    for &provider in providers {
        let response = session.ask(provider, prompt, BUSY).await;
        responses.push((provider, response));
    }
    responses
}
