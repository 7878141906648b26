//! Mock provider endpoints shared by the command handler tests

use super::Session;
use promptlab_core::config::{Credential, PromptLabConfig};
use promptlab_core::llm::{Credentials, Dispatcher};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const OPENAI_TEXT: &str = "openai answer";
pub const ANTHROPIC_TEXT: &str = "anthropic answer";

/// A session whose providers both point at `server`
pub fn session_for(server: &MockServer, dry_run: bool, concurrent: bool) -> Session {
    let mut config = PromptLabConfig::default();
    config.openai.base_url = server.uri();
    config.anthropic.base_url = server.uri();
    config.dispatch.concurrent = concurrent;
    let credentials = Credentials {
        openai: Credential::new("sk-test-openai"),
        anthropic: Credential::new("sk-ant-test"),
    };
    Session::new(
        Dispatcher::from_config(&config).unwrap(),
        credentials,
        dry_run,
    )
}

/// Mount both provider endpoints, each expecting exactly the given call count
pub async fn mount_providers(server: &MockServer, openai_calls: u64, anthropic_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": OPENAI_TEXT}}]
        })))
        .expect(openai_calls)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": ANTHROPIC_TEXT}]
        })))
        .expect(anthropic_calls)
        .mount(server)
        .await;
}

/// Path and user prompt of every request the server saw, in arrival order
pub async fn sent_prompts(server: &MockServer) -> Vec<(String, String)> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            let prompt = body["messages"]
                .as_array()
                .and_then(|messages| messages.last())
                .and_then(|message| message["content"].as_str())
                .unwrap_or_default()
                .to_string();
            (request.url.path().to_string(), prompt)
        })
        .collect()
}
