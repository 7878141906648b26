use super::Session;
use anyhow::Result;
use console::style;
use promptlab_core::config::Provider;
use promptlab_core::llm::error_display::format_llm_success;
use promptlab_core::llm::{ChainObserver, ModelResponse};
use promptlab_core::prompts::{ChainStep, PromptChain};
use promptlab_core::ui::{Spinner, render, start_loading_spinner};

/// Prints each step as it runs and spins while the request is in flight
struct ChainPrinter<'a> {
    session: &'a Session,
    provider: Provider,
    spinner: Option<Spinner>,
}

impl ChainObserver for ChainPrinter<'_> {
    fn step_started(&mut self, step: ChainStep, prompt: &str) {
        println!("{}\n", render::section(&step.to_string()));
        println!("{}\n", render::prompt_preview("Prompt", prompt));
        self.spinner = Some(start_loading_spinner(step.busy_message()));
    }

    fn step_finished(&mut self, _step: ChainStep, response: &ModelResponse) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        self.session.print_response(self.provider, response);
    }
}

/// Handle the chain command: brainstorm, outline, and introduction in order
pub async fn handle_chain_command(
    session: &Session,
    topic: &str,
    provider: Provider,
) -> Result<()> {
    println!(
        "{}\n",
        render::section(&format!("Prompt Chaining: {topic}"))
    );

    if session.dry_run() {
        // Later steps depend on model output, so only the first prompt exists yet.
        let chain = PromptChain::new(topic);
        println!(
            "{}\n",
            render::prompt_preview(
                &ChainStep::Brainstorm.to_string(),
                &chain.brainstorm_prompt()
            )
        );
        return Ok(());
    }

    let mut printer = ChainPrinter {
        session,
        provider,
        spinner: None,
    };
    let record = session
        .dispatcher()
        .run_chain(
            provider,
            session.credentials().get(provider),
            topic,
            &mut printer,
        )
        .await;

    if record.completed() {
        println!("{}", format_llm_success(provider, "Chain complete!"));
    } else if let Some(failed) = record.failure() {
        println!(
            "{}",
            style(format!("Chain stopped at {}", failed.step)).yellow()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::{mount_providers, sent_prompts, session_for};
    use wiremock::MockServer;

    #[tokio::test]
    async fn dry_run_sends_nothing() {
        let server = MockServer::start().await;
        mount_providers(&server, 0, 0).await;
        let session = session_for(&server, true, false);

        handle_chain_command(&session, "remote work", Provider::Anthropic)
            .await
            .unwrap();

        assert!(sent_prompts(&server).await.is_empty());
    }

    #[tokio::test]
    async fn chain_runs_three_steps_on_the_chosen_provider() {
        let server = MockServer::start().await;
        mount_providers(&server, 3, 0).await;
        let session = session_for(&server, false, false);

        handle_chain_command(&session, "remote work", Provider::OpenAI)
            .await
            .unwrap();

        let sent = sent_prompts(&server).await;
        assert_eq!(sent.len(), 3);
        assert!(sent.iter().all(|(path, _)| path == "/chat/completions"));
        assert_eq!(
            sent[0].1,
            PromptChain::new("remote work").brainstorm_prompt()
        );
    }
}
