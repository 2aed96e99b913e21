//! Integration tests for the advice endpoint
//!
//! The LLM endpoint is mocked with wiremock; the fallback path must
//! produce a knowledge-base answer whenever the call fails.

mod common;

use axum::http::StatusCode;
use calorie_coach_backend::config::{AiConfig, AppConfig};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ai_config(base_url: String) -> AppConfig {
    AppConfig {
        ai: AiConfig {
            enabled: true,
            base_url,
            api_key: "sk-test".to_string(),
            model: "qwen-turbo".to_string(),
            timeout_secs: 5,
        },
        ..AppConfig::default()
    }
}

fn advice_body(question: &str) -> String {
    json!({
        "user_id": "alice",
        "question": question,
        "profile": {
            "weight_kg": 70.0,
            "height_cm": 175.0,
            "age_years": 30,
            "sex": "male",
            "activity_level": "lightly_active",
            "goal": "lose"
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_advice_uses_llm_when_available() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Swap the bubble tea for green tea."}}
            ]
        })))
        .mount(&server)
        .await;

    let app = common::TestApp::with_config(ai_config(format!("{}/v1", server.uri())));

    let (status, response) = app
        .post("/api/v1/advice", &advice_body("should I drink less sugar drinks"))
        .await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(parsed["source"], "llm");
    assert_eq!(parsed["answer"], "Swap the bubble tea for green tea.");
    assert!(!parsed["references"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_advice_falls_back_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = common::TestApp::with_config(ai_config(format!("{}/v1", server.uri())));

    let (status, response) = app
        .post("/api/v1/advice", &advice_body("how much protein do I need"))
        .await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(parsed["source"], "knowledge_base");
    assert!(!parsed["answer"].as_str().unwrap().is_empty());
    assert!(parsed["references"]
        .as_array()
        .unwrap()
        .contains(&json!("Protein intake")));
}

#[tokio::test]
async fn test_advice_falls_back_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let app = common::TestApp::with_config(ai_config(format!("{}/v1", server.uri())));

    let (status, response) = app
        .post("/api/v1/advice", &advice_body("how much water per day"))
        .await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(parsed["source"], "knowledge_base");
}

#[tokio::test]
async fn test_advice_works_with_ai_disabled() {
    let app = common::TestApp::new();

    let (status, response) = app
        .post("/api/v1/advice", &advice_body("tips for a weight plateau"))
        .await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(parsed["source"], "knowledge_base");
    assert!(!parsed["answer"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_advice_rejects_empty_question() {
    let app = common::TestApp::new();

    let body = json!({"user_id": "alice", "question": ""}).to_string();
    let (status, _) = app.post("/api/v1/advice", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
