use chrono::{DateTime, Utc};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct TasteFusionConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Attempts made while the model keeps returning output that does not
    /// match the recipe schema.
    pub max_attempts: u32,
    pub timeout_secs: u64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "google/gemini-2.0-flash-exp:free".to_string(),
            max_attempts: 3,
            timeout_secs: 60,
        }
    }
}

pub fn generate_timestamp() -> DateTime<Utc> {
    Utc::now()
}
