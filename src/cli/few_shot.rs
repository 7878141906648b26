use super::Session;
use anyhow::Result;
use promptlab_core::config::Provider;
use promptlab_core::llm::ModelResponse;
use promptlab_core::prompts::{FewShotTask, few_shot};
use promptlab_core::ui::render;

/// Handle the few-shot command: one example-primed prompt on both providers
pub async fn handle_few_shot_command(
    session: &Session,
    task: FewShotTask,
    input: &str,
) -> Result<()> {
    let prompt = few_shot(task, input);

    println!(
        "{}\n",
        render::section(&format!("Few-Shot Learning: {task}"))
    );
    println!("{}\n", render::prompt_preview("Prompt", &prompt));

    if session.dry_run() {
        return Ok(());
    }

    for (provider, response) in collect_responses(session, &prompt).await {
        session.print_response(provider, &response);
    }

    Ok(())
}

async fn collect_responses(session: &Session, prompt: &str) -> Vec<(Provider, ModelResponse)> {
    if session.concurrent() {
        let comparison = session.ask_both(prompt, "Processing...").await;
        return comparison
            .in_order()
            .into_iter()
            .map(|(provider, response)| (provider, response.clone()))
            .collect();
    }

    let mut responses = Vec::with_capacity(2);
    for provider in Provider::all_providers() {
        let response = session.ask(provider, prompt, "Processing...").await;
        responses.push((provider, response));
    }
    responses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::{
        ANTHROPIC_TEXT, OPENAI_TEXT, mount_providers, sent_prompts, session_for,
    };
    use wiremock::MockServer;

    #[tokio::test]
    async fn dry_run_sends_nothing() {
        let server = MockServer::start().await;
        mount_providers(&server, 0, 0).await;
        let session = session_for(&server, true, false);

        let task = FewShotTask::SentimentAnalysis;
        handle_few_shot_command(&session, task, task.default_input())
            .await
            .unwrap();

        assert!(sent_prompts(&server).await.is_empty());
    }

    #[tokio::test]
    async fn same_prompt_goes_to_openai_then_anthropic() {
        let server = MockServer::start().await;
        mount_providers(&server, 1, 1).await;
        let session = session_for(&server, false, false);

        let prompt = few_shot(FewShotTask::EmailClassification, "Meeting moved to 3pm");
        let responses = collect_responses(&session, &prompt).await;

        assert_eq!(
            sent_prompts(&server).await,
            vec![
                ("/chat/completions".to_string(), prompt.clone()),
                ("/messages".to_string(), prompt.clone()),
            ]
        );
        assert_eq!(
            responses[0],
            (Provider::OpenAI, ModelResponse::Text(OPENAI_TEXT.into()))
        );
        assert_eq!(
            responses[1],
            (Provider::Anthropic, ModelResponse::Text(ANTHROPIC_TEXT.into()))
        );
    }
}
