use axum::{
    Extension,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tastefusion_core::domain::meal::ports::MealService;
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
pub struct DeleteMealResponse {
    pub success: bool,
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/meals/{index}",
    tag = "meal",
    summary = "Remove a meal",
    description = "Removes the meal at a zero-based position; later meals shift down",
    params(
        ("index" = i64, Path, description = "Zero-based position in the history"),
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    responses(
        (status = 200, body = DeleteMealResponse, description = "Meal removed"),
        (status = 404, body = ApiErrorResponse, description = "No meal at this index")
    )
)]
pub async fn delete_meal(
    Path(index): Path<i64>,
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<DeleteMealResponse>, ApiError> {
    let index = usize::try_from(index)
        .map_err(|_| ApiError::NotFound("Meal not found".to_string()))?;

    let removed = state
        .service
        .remove_meal(session.session_id, index)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteMealResponse {
        success: true,
        message: format!("Removed '{}' from history", removed.name),
    }))
}
