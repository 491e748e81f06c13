use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use tastefusion_core::domain::meal::ports::MealService;
use utoipa::ToSchema;

use crate::application::{
    http::{
        meal::validators::CreateMealValidator,
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
pub struct CreateMealResponse {
    pub success: bool,
    pub message: String,
    pub meal_count: usize,
}

#[utoipa::path(
    post,
    path = "/meals",
    tag = "meal",
    summary = "Log a meal",
    description = "Appends a meal to the caller's history",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    request_body = CreateMealValidator,
    responses(
        (status = 201, body = CreateMealResponse, description = "Meal added"),
        (status = 400, body = ApiErrorResponse, description = "Invalid meal")
    )
)]
pub async fn create_meal(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<CreateMealValidator>,
) -> Result<Response<CreateMealResponse>, ApiError> {
    let added = state
        .service
        .add_meal(session.session_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateMealResponse {
        success: true,
        message: format!("Added '{}' to your meal history", added.meal.name),
        meal_count: added.meal_count,
    }))
}
