//! Shared helpers for integration tests
//!
//! Provides a wiremock stand-in for the OpenAI-compatible model endpoint and
//! helpers to build the full application router against it.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use llmplan::api::{build_router, ApiState};
use llmplan::config::Settings;
use llmplan::llm::{ChatClient, LlmSummaryRepository};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the chat client posts to, relative to the mock server root
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Mock LLM endpoint
pub struct MockLlm {
    pub server: MockServer,
}

impl MockLlm {
    pub async fn start() -> Self {
        Self { server: MockServer::start().await }
    }

    /// Base URL to configure as `LMSTUDIO_BASE_URL`
    pub fn base_url(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    /// Every completion answers with `content`
    pub async fn replies_with(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(content)))
            .mount(&self.server)
            .await;
    }

    /// Every completion fails with `status`
    pub async fn fails_with(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream failure"))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the endpoint has received
    pub async fn request_count(&self) -> usize {
        self.server.received_requests().await.map(|r| r.len()).unwrap_or(0)
    }

    /// JSON bodies of all received requests
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap_or(Value::Null))
            .collect()
    }
}

/// OpenAI-style chat completion body
pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "qwen/qwen3-4b",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// Settings pointed at `llm` with fast retries
pub fn settings_for(llm: &MockLlm) -> Settings {
    Settings {
        lmstudio_base_url: llm.base_url(),
        lmstudio_timeout: 5,
        lmstudio_max_retries: 1,
        ..Default::default()
    }
}

/// Full application router wired to the real LLM repository
pub fn app_for(settings: &Settings) -> Router {
    let connection = settings.connection_config().expect("valid connection config");
    let client = ChatClient::new(&connection)
        .expect("http client")
        .with_retry_delay(Duration::from_millis(1));
    let repository = LlmSummaryRepository::new(client)
        .with_health_check_model(settings.default_model_name.clone());

    let state = ApiState::new(
        Arc::new(repository),
        settings.default_summary_config().expect("valid summary config"),
        Arc::new(settings.clone()),
    );
    build_router(state)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}
