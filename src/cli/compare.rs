use super::Session;
use anyhow::Result;
use promptlab_core::config::Provider;
use promptlab_core::llm::ModelResponse;
use promptlab_core::prompts::{Audience, ResponseFormat, advanced, basic};
use promptlab_core::ui::render;

/// One provider's answers to the basic and advanced prompts
#[derive(Debug)]
struct ProviderAnswers {
    provider: Provider,
    basic: ModelResponse,
    advanced: ModelResponse,
}

/// Handle the compare command: basic and advanced prompts on both providers
pub async fn handle_compare_command(
    session: &Session,
    topic: &str,
    advanced_topic: &str,
    audience: Audience,
    format: ResponseFormat,
) -> Result<()> {
    let basic_prompt = basic(topic);
    let advanced_prompt = advanced(advanced_topic, audience, format);

    println!("{}\n", render::section("Basic vs Advanced Prompts"));
    println!(
        "{}\n",
        render::prompt_preview("Basic prompt", &basic_prompt)
    );
    println!(
        "{}\n",
        render::prompt_preview("Advanced prompt", &advanced_prompt)
    );

    if session.dry_run() {
        return Ok(());
    }

    for answers in collect_answers(session, &basic_prompt, &advanced_prompt).await {
        print_answers(session, &answers);
    }

    Ok(())
}

/// Basic then advanced for OpenAI, then the same for Anthropic
///
/// In concurrent mode each prompt goes to both providers at once instead.
async fn collect_answers(
    session: &Session,
    basic_prompt: &str,
    advanced_prompt: &str,
) -> Vec<ProviderAnswers> {
    if session.concurrent() {
        let basic_results = session
            .ask_both(basic_prompt, "Calling both providers...")
            .await;
        let advanced_results = session
            .ask_both(advanced_prompt, "Calling both providers...")
            .await;
        return basic_results
            .in_order()
            .into_iter()
            .zip(advanced_results.in_order())
            .map(|((provider, basic), (_, advanced))| ProviderAnswers {
                provider,
                basic: basic.clone(),
                advanced: advanced.clone(),
            })
            .collect();
    }

    let mut answers = Vec::with_capacity(2);
    for provider in Provider::all_providers() {
        let busy = format!("Calling {}...", provider.display_name());
        let basic = session.ask(provider, basic_prompt, &busy).await;
        let advanced = session.ask(provider, advanced_prompt, &busy).await;
        answers.push(ProviderAnswers {
            provider,
            basic,
            advanced,
        });
    }
    answers
}

fn print_answers(session: &Session, answers: &ProviderAnswers) {
    println!(
        "{}\n",
        render::section(&format!("{} Response", answers.provider.display_name()))
    );
    println!("Basic prompt:");
    session.print_response(answers.provider, &answers.basic);
    println!("Advanced prompt:");
    session.print_response(answers.provider, &answers.advanced);
}
