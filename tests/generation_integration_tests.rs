use std::sync::Arc;

use quill::core::action::{Action, Effect, update};
use quill::core::conversation::{GENERATION_ERROR_TEXT, Sender};
use quill::core::next_words::NextWords;
use quill::core::state::App;
use quill::generation::{GenerateRequest, GenerationError, HttpGenerator, TextGenerator};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

async fn mount_generate(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/generate_text"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Submit `prompt`, run the spawned request inline and apply its result.
async fn submit_and_complete(app: &mut App, prompt: &str) {
    let effect = update(app, Action::Submit(prompt.to_string()));
    let Effect::SpawnRequest(request) = effect else {
        panic!("Expected SpawnRequest, got {:?}", effect);
    };
    assert!(app.is_loading);

    let result = app.generator.generate(&request).await;
    update(app, Action::from_generation(result));
}

// ============================================================================
// HttpGenerator
// ============================================================================

#[tokio::test]
async fn test_generate_sends_seed_and_word_count() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate_text"))
        .and(body_json(json!({"seed_text": "once upon", "next_words": 5})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"generated_text": "once upon a time there was"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = HttpGenerator::new(mock_server.uri());
    let request = GenerateRequest::new("once upon", NextWords::new(5));

    let text = generator.generate(&request).await.unwrap();
    assert_eq!(text, "once upon a time there was");
}

#[tokio::test]
async fn test_generate_trailing_slash_in_endpoint() {
    let mock_server = MockServer::start().await;
    mount_generate(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(json!({"generated_text": "ok"})),
    )
    .await;

    let generator = HttpGenerator::new(format!("{}/", mock_server.uri()));
    let request = GenerateRequest::new("seed", NextWords::default());

    assert_eq!(generator.generate(&request).await.unwrap(), "ok");
}

#[tokio::test]
async fn test_generate_server_error_with_detail() {
    let mock_server = MockServer::start().await;
    mount_generate(
        &mock_server,
        ResponseTemplate::new(500).set_body_json(json!({"detail": "model not loaded"})),
    )
    .await;

    let generator = HttpGenerator::new(mock_server.uri());
    let request = GenerateRequest::new("seed", NextWords::default());

    match generator.generate(&request).await {
        Err(GenerationError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "model not loaded");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_validation_error_is_api_error() {
    let mock_server = MockServer::start().await;
    mount_generate(
        &mock_server,
        ResponseTemplate::new(422)
            .set_body_json(json!({"detail": [{"loc": ["body", "next_words"], "msg": "field required"}]})),
    )
    .await;

    let generator = HttpGenerator::new(mock_server.uri());
    let request = GenerateRequest::new("seed", NextWords::default());

    match generator.generate(&request).await {
        Err(GenerationError::Api { status, message }) => {
            assert_eq!(status, 422);
            assert!(message.contains("field required"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;
    mount_generate(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not json at all"),
    )
    .await;

    let generator = HttpGenerator::new(mock_server.uri());
    let request = GenerateRequest::new("seed", NextWords::default());

    assert!(matches!(
        generator.generate(&request).await,
        Err(GenerationError::Parse(_))
    ));
}

#[tokio::test]
async fn test_generate_missing_field_is_parse_error() {
    let mock_server = MockServer::start().await;
    mount_generate(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(json!({"text": "wrong key"})),
    )
    .await;

    let generator = HttpGenerator::new(mock_server.uri());
    let request = GenerateRequest::new("seed", NextWords::default());

    assert!(matches!(
        generator.generate(&request).await,
        Err(GenerationError::Parse(_))
    ));
}

#[tokio::test]
async fn test_generate_connection_refused_is_network_error() {
    // Nothing listens on port 1
    let generator = HttpGenerator::new("http://127.0.0.1:1");
    let request = GenerateRequest::new("seed", NextWords::default());

    assert!(matches!(
        generator.generate(&request).await,
        Err(GenerationError::Network(_))
    ));
}

#[tokio::test]
async fn test_health_probe() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&mock_server)
        .await;

    let generator = HttpGenerator::new(mock_server.uri());
    assert!(generator.is_reachable().await);

    let offline = HttpGenerator::new("http://127.0.0.1:1");
    assert!(!offline.is_reachable().await);
}

// ============================================================================
// Session Controller end to end
// ============================================================================

#[tokio::test]
async fn test_prompt_success_appends_user_then_bot() {
    let mock_server = MockServer::start().await;
    mount_generate(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(json!({"generated_text": "hi there"})),
    )
    .await;

    let generator: Arc<dyn TextGenerator> = Arc::new(HttpGenerator::new(mock_server.uri()));
    let mut app = App::new(generator, mock_server.uri());

    submit_and_complete(&mut app, "hello").await;

    let messages = app.conversation.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[0].text, "hello");
    assert_eq!(messages[1].sender, Sender::Bot);
    assert_eq!(messages[1].text, "hi there");
    assert!(!app.is_loading);
}

#[tokio::test]
async fn test_prompt_failure_appends_fixed_error_text() {
    let generator: Arc<dyn TextGenerator> = Arc::new(HttpGenerator::new("http://127.0.0.1:1"));
    let mut app = App::new(generator, "http://127.0.0.1:1".to_string());

    submit_and_complete(&mut app, "hello").await;

    let messages = app.conversation.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "hello");
    assert_eq!(messages[1].sender, Sender::Bot);
    assert_eq!(messages[1].text, GENERATION_ERROR_TEXT);
    assert!(!app.is_loading);
}

#[tokio::test]
async fn test_word_count_setting_reaches_the_service() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_text"))
        .and(body_json(json!({"seed_text": "hello", "next_words": 15})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"generated_text": "x"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator: Arc<dyn TextGenerator> = Arc::new(HttpGenerator::new(mock_server.uri()));
    let mut app = App::new(generator, mock_server.uri());

    // Out-of-range values are clamped before they are sent
    update(&mut app, Action::SetNextWords(40));
    submit_and_complete(&mut app, "hello").await;

    assert_eq!(app.conversation.messages()[1].text, "x");
}
