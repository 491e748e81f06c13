use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use tastefusion_core::domain::meal::ports::MealService;
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClearMealsResponse {
    pub success: bool,
    pub message: String,
    pub removed: usize,
}

#[utoipa::path(
    delete,
    path = "/meals",
    tag = "meal",
    summary = "Clear meal history",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    responses(
        (status = 200, body = ClearMealsResponse)
    )
)]
pub async fn clear_meals(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<ClearMealsResponse>, ApiError> {
    let removed = state
        .service
        .clear_meals(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearMealsResponse {
        success: true,
        message: format!("Cleared {} meals from history", removed),
        removed,
    }))
}
