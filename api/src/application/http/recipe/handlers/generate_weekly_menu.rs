use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use tastefusion_core::domain::recipe::{entities::WeeklyMenuDay, ports::RecipeService};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WeeklyMenuResponse {
    pub success: bool,
    pub weekly_menu: Vec<WeeklyMenuDay>,
}

#[utoipa::path(
    post,
    path = "/generate-weekly-menu",
    tag = "recipe",
    summary = "Generate a weekly menu",
    description = "One fusion recipe per day from Monday to Sunday. Any failing day fails the whole menu.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    responses(
        (status = 200, body = WeeklyMenuResponse),
        (status = 500, body = ApiErrorResponse, description = "Menu generation failed")
    )
)]
pub async fn generate_weekly_menu(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<WeeklyMenuResponse>, ApiError> {
    let weekly_menu = state
        .service
        .generate_weekly_menu(session.session_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to generate weekly menu: {}", e);
            ApiError::InternalServerError(format!("Failed to generate weekly menu: {}", e))
        })?;

    Ok(Response::OK(WeeklyMenuResponse {
        success: true,
        weekly_menu,
    }))
}
