#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use videofuel_api::config::ServerConfig;
use videofuel_api::router::build_app_router;
use videofuel_api::state::AppState;
use videofuel_llm::{ChatCompletion, CompletionRequest, LlmConfig, LlmError};

pub const TITLES_REPLY: &str = "1. How to Cook Perfect Pasta Every Single Time at Home\n\
2. \"Pasta Secrets Chefs Never Tell You About\"\n\
3. The Ultimate Guide to Cooking Pasta Like an Italian\n\
4. 5 Pasta Mistakes You Are Probably Making Right Now\n\
5. Easy Weeknight Pasta Recipes for Busy People";

/// First title parsed out of [`TITLES_REPLY`].
pub const FIRST_TITLE: &str = "How to Cook Perfect Pasta Every Single Time at Home";

pub const DESCRIPTION_REPLY: &str = "DESCRIPTION: Learn how to cook pasta perfectly. Tips from real chefs.\n\
HASHTAGS: #pasta #cooking #food";

pub const SCRIPT_REPLY: &str = "HOOK: Ever wondered why restaurant pasta tastes better?\n\
SECTION1: Water - Salt it like the sea.\n\
SECTION2: Timing - Taste before the box says.\n\
SECTION3: Sauce - Finish the pasta in the pan.\n\
OUTRO: Subscribe for more recipes!";

pub const THUMBNAIL_REPLY: &str = "1. PERFECT PASTA\n2. CHEF SECRETS\n3. NEVER FAIL AGAIN";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        llm: LlmConfig {
            api_key: Some("test-key".to_string()),
            ..LlmConfig::default()
        },
    }
}

// ---------------------------------------------------------------------------
// Provider stubs
// ---------------------------------------------------------------------------

/// Answers each step with a canned reply chosen from the user prompt, and
/// records every request it receives.
#[derive(Default)]
pub struct StubLlm {
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl StubLlm {
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> CompletionRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl ChatCompletion for StubLlm {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let user = request
            .messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.requests.lock().unwrap().push(request);

        let reply = if user.contains("HOOK:") {
            SCRIPT_REPLY
        } else if user.contains("DESCRIPTION:") || user.contains("AÇIKLAMA:") {
            DESCRIPTION_REPLY
        } else if user.to_lowercase().contains("thumbnail") {
            THUMBNAIL_REPLY
        } else {
            TITLES_REPLY
        };
        Ok(reply.to_string())
    }
}

/// Fails every call with a provider error.
pub struct FailingLlm;

#[async_trait]
impl ChatCompletion for FailingLlm {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 500,
            body: "upstream exploded".to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application router, using the given pool and provider.
///
/// Goes through `build_app_router` so integration tests exercise the same
/// middleware stack that production uses.
pub fn build_test_app(pool: PgPool, llm: Arc<dyn ChatCompletion>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        llm,
    };
    build_app_router(state, &config)
}

/// Build the app with a fresh [`StubLlm`], returning both.
pub fn build_stub_app(pool: PgPool) -> (Router, Arc<StubLlm>) {
    let stub = Arc::new(StubLlm::default());
    let app = build_test_app(pool, stub.clone());
    (app, stub)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
