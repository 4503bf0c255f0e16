use super::*;
use serde_json::json;
use std::path::PathBuf;
use triage_core::{
    create_initial_state, AgentState, EmailContext, Error as CoreError, SentimentLevel,
    UrgencyLevel, WorkflowStage,
};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn executor(server: &MockServer) -> OllamaSkillExecutor {
    let config = OllamaConfig::new()
        .with_base_url(server.uri())
        .with_model("test-model")
        .with_timeout(Duration::from_secs(5));
    OllamaSkillExecutor::new(config).unwrap()
}

fn state() -> AgentState {
    let mut state = create_initial_state("Process emails from inbox folder").unwrap();
    state
        .working
        .email_processing
        .load_inbox(vec![PathBuf::from("inbox/a.txt")]);
    state
}

fn chat_reply(content: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "model": "test-model",
        "message": { "role": "assistant", "content": content.to_string() },
        "done": true
    }))
}

#[test]
fn test_config_builder() {
    let config = OllamaConfig::new()
        .with_base_url("http://ollama:11434/")
        .with_model("mistral");
    assert_eq!(config.base_url, "http://ollama:11434");
    assert_eq!(config.model, "mistral");
    assert_eq!(OllamaConfig::default().base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_prompt_includes_email() {
    let executor = OllamaSkillExecutor::new(OllamaConfig::default()).unwrap();
    let state = state();
    let context = SkillContext::new(&state).with_email(EmailContext {
        file_name: "a.txt".to_string(),
        content: "Please send an offer for 20 chairs.".to_string(),
    });

    let prompt = executor
        .render_prompt(SkillName::AnalyzeEmail, &context)
        .unwrap();
    assert!(prompt.contains("File: a.txt"));
    assert!(prompt.contains("20 chairs"));
    assert!(!prompt.contains("{{"));
}

#[test]
fn test_custom_definition_overrides_builtin() {
    let executor = OllamaSkillExecutor::new(OllamaConfig::default())
        .unwrap()
        .with_definition(
            SkillDefinition::builtin(SkillName::AnalyzeAndPlan).with_template("Goal={{goal}}"),
        );
    let state = state();

    let prompt = executor
        .render_prompt(SkillName::AnalyzeAndPlan, &SkillContext::new(&state))
        .unwrap();
    assert_eq!(prompt, "Goal=Process emails from inbox folder");
}

#[tokio::test]
async fn test_analyze_email_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "format": "json",
            "stream": false
        })))
        .respond_with(chat_reply(json!({
            "main_topic": "Offer request",
            "business_category": "Sales",
            "contact_data": "anna@example.com",
            "urgency": "Medium",
            "sentiment": "Positive",
            "summary": "Customer wants an offer for chairs."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let state = state();
    let context = SkillContext::new(&state).with_email(EmailContext {
        file_name: "a.txt".to_string(),
        content: "Offer please".to_string(),
    });

    let output = executor(&server)
        .execute(SkillName::AnalyzeEmail, &context)
        .await
        .unwrap();

    match output {
        SkillOutput::AnalyzeEmail(analysis) => {
            assert_eq!(analysis.business_category, "Sales");
            assert_eq!(analysis.urgency, UrgencyLevel::Medium);
            assert_eq!(analysis.sentiment, SentimentLevel::Positive);
        }
        other => panic!("unexpected output: {other:?}"),
    }
}

#[tokio::test]
async fn test_plan_reply_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(chat_reply(json!({
            "chain_of_thought": "Nothing processed yet",
            "next_stage": "CHECK_INBOX"
        })))
        .mount(&server)
        .await;

    let state = state();
    let output = executor(&server)
        .execute(SkillName::AnalyzeAndPlan, &SkillContext::new(&state))
        .await
        .unwrap();

    assert!(matches!(
        output,
        SkillOutput::AnalyzeAndPlan(plan) if plan.next_stage == WorkflowStage::CheckInbox
    ));
}

#[tokio::test]
async fn test_server_error_is_external_call_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "model 'test-model' not found" })),
        )
        .mount(&server)
        .await;

    let state = state();
    let err = executor(&server)
        .execute(SkillName::AnalyzeAndPlan, &SkillContext::new(&state))
        .await
        .unwrap_err();

    match err {
        CoreError::ExternalCall { target, message } => {
            assert_eq!(target, "analyze_and_plan");
            assert!(message.contains("not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_reply_is_external_call_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(chat_reply(json!({ "main_topic": "only this" })))
        .mount(&server)
        .await;

    let state = state();
    let err = executor(&server)
        .execute(SkillName::AnalyzeEmail, &SkillContext::new(&state))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::ExternalCall { .. }));
}
