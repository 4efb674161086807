use aipermit::{
    config::{Config, LlmConfig},
    llm::{ChatCompletionResponse, Choice, ResponseMessage},
    server::{AppState, build_router},
    summary::Summarizer,
};
use axum::Router;
use serde_json::{Value, json};
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";

/// Create an LLM configuration pointing at `base_url` with a test key
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: Some(TEST_API_KEY.to_string()),
        model: "gpt-4o-mini".to_string(),
        timeout_secs: 5,
    }
}

/// Same as `create_test_llm_config` but without a credential
pub fn create_unconfigured_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        api_key: None,
        ..create_test_llm_config(base_url)
    }
}

/// Build the full router around a real `OpenAiClient` talking to `llm`
pub fn create_test_app(llm: LlmConfig) -> Router {
    let summarizer = Summarizer::new(llm).expect("Failed to build summarizer");
    create_test_app_with(summarizer)
}

pub fn create_test_app_with(summarizer: Summarizer) -> Router {
    let state = AppState {
        summarizer: Arc::new(summarizer),
    };
    build_router(state, &Config::default().server).expect("Failed to build router")
}

/// In-memory completion with a single choice
pub fn completion_response(content: Option<&str>) -> ChatCompletionResponse {
    ChatCompletionResponse {
        choices: vec![Choice {
            message: ResponseMessage {
                content: content.map(str::to_string),
            },
        }],
    }
}

/// Wire-format completion body as returned by the provider
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1234567890,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160 }
    })
}

pub const SAMPLE_PERMIT: &str = "CITY OF SPRINGFIELD BUILDING PERMIT No. 2024-0457. \
Permission is granted to construct a 12x16 ft rear deck. Work must begin within \
180 days of issuance. Inspections required at footing and final stages. \
Permit expires 2025-06-30 unless renewed.";
