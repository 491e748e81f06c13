use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    recipe::{ports::LLMClient, schema::FUSION_RECIPE_SCHEMA_NAME},
};

const EXTRA_HEADERS: [(&str, &str); 2] = [
    ("HTTP-Referer", "https://github.com/tastefusion/tastefusion"),
    ("X-Title", "TasteFusion"),
];

/// Client for OpenRouter's OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenRouterLLMClient {
    api_key: String,
    base_url: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: &'static str,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageResponse,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: Option<String>,
}

impl OpenRouterLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model_name: config.model.clone(),
            client,
        })
    }

    async fn call_chat_completions(&self, request: ChatRequest) -> Result<String, CoreError> {
        if self.api_key.is_empty() {
            return Err(CoreError::ExternalServiceError(
                "OpenRouter API key not set. Set OPENROUTER_API_KEY.".to_string(),
            ));
        }

        let url = format!("{}/chat/completions", self.base_url);

        let mut builder = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request);
        for (name, value) in EXTRA_HEADERS {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("OpenRouter request failed: {}", e);
            CoreError::ExternalServiceError(format!("LLM API error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenRouter API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenRouter response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for OpenRouterLLMClient {
    async fn generate_with_text(
        &self,
        system_prompt: String,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = ChatRequest {
            model: self.model_name.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: system_prompt,
                },
                Message {
                    role: "user",
                    content: prompt,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: FUSION_RECIPE_SCHEMA_NAME,
                    strict: true,
                    schema: response_schema,
                },
            },
        };

        self.call_chat_completions(request).await
    }
}
