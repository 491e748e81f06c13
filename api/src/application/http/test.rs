use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use crate::{
    application::{
        http::server::http_server::{router, state},
        session_middleware::SESSION_HEADER,
    },
    args::{Args, LlmArgs, LogArgs, ServerArgs},
};

pub fn test_args(llm_base_url: &str) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["*".to_string()],
        },
        llm: LlmArgs {
            api_key: "test-key".to_string(),
            base_url: llm_base_url.to_string(),
            model: "test-model".to_string(),
            max_attempts: 3,
            timeout_secs: 5,
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

/// Router wired to the real service; the LLM provider is `llm`.
pub async fn test_server(llm: &MockServer) -> TestServer {
    test_server_with_args(test_args(&llm.uri())).await
}

pub async fn test_server_with_args(args: Args) -> TestServer {
    let app_state = state(Arc::new(args)).await.expect("state should build");

    TestServer::new(router(app_state).expect("router should build")).expect("test server")
}

pub fn session_header(id: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(SESSION_HEADER),
        HeaderValue::from_static(id),
    )
}

pub fn recipe_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Creamy curry sauce over fresh pasta",
        "fusion_of": ["Indian", "Italian"],
        "ingredients": ["pasta", "garam masala", "cream"],
        "instructions": ["Cook pasta", "Simmer sauce", "Toss together"],
        "prep_time": 10,
        "cook_time": 20,
        "difficulty": "easy",
        "flavor_profile": ["creamy", "spicy"],
        "why_youll_love_it": "It pairs your love of curry with comfort pasta"
    })
}

pub fn chat_completion(content: &str) -> Value {
    json!({
        "id": "gen-test",
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

/// Every chat completion answers with the same recipe.
pub async fn mount_recipe(llm: &MockServer, name: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion(&recipe_body(name).to_string())),
        )
        .mount(llm)
        .await;
}

pub fn meal_payload(name: &str, cuisine: &str, meal_type: &str) -> Value {
    json!({
        "name": name,
        "cuisine": cuisine,
        "ingredients": ["rice", "garlic"],
        "flavors": ["savory"],
        "meal_type": meal_type
    })
}
