use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use tastefusion_core::domain::{
    recipe::{entities::FusionRecipe, ports::RecipeService},
    taste_profile::entities::TasteProfile,
};
use utoipa::ToSchema;

use crate::application::{
    http::{
        recipe::validators::GenerateRecipeValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipeResponse {
    pub success: bool,
    pub recipe: FusionRecipe,
    pub taste_profile_used: TasteProfile,
}

#[utoipa::path(
    post,
    path = "/generate-recipe",
    tag = "recipe",
    summary = "Generate a fusion recipe",
    description = "Builds a recipe tailored to the caller's taste profile",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    request_body = GenerateRecipeValidator,
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 400, body = ApiErrorResponse, description = "Invalid request"),
        (status = 500, body = ApiErrorResponse, description = "Recipe generation failed")
    )
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let generated = state
        .service
        .generate_recipe(session.session_id, payload.into())
        .await
        .map_err(|e| {
            tracing::error!("Failed to generate recipe: {}", e);
            ApiError::InternalServerError(format!("Failed to generate recipe: {}", e))
        })?;

    Ok(Response::OK(GenerateRecipeResponse {
        success: true,
        recipe: generated.recipe,
        taste_profile_used: generated.taste_profile_used,
    }))
}
