use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{GeneratedRecipe, WeeklyMenuDay},
        value_objects::FusionRequest,
    },
    session::SessionId,
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Returns the raw text of the model's answer, constrained to
    /// `response_schema` where the provider supports it.
    fn generate_with_text(
        &self,
        system_prompt: String,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe generation
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        session_id: SessionId,
        request: FusionRequest,
    ) -> impl Future<Output = Result<GeneratedRecipe, CoreError>> + Send;

    /// One recipe per day, Monday first. Fails as a whole if any day fails.
    fn generate_weekly_menu(
        &self,
        session_id: SessionId,
    ) -> impl Future<Output = Result<Vec<WeeklyMenuDay>, CoreError>> + Send;
}
