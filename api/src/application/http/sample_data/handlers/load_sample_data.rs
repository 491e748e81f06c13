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
pub struct LoadSampleDataResponse {
    pub success: bool,
    pub message: String,
    pub total_meals: usize,
}

#[utoipa::path(
    post,
    path = "/load-sample-data",
    tag = "sample-data",
    summary = "Load demo meals",
    description = "Appends eight demo meals to the history. Calling it twice appends them twice.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    responses(
        (status = 200, body = LoadSampleDataResponse)
    )
)]
pub async fn load_sample_data(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<LoadSampleDataResponse>, ApiError> {
    let loaded = state
        .service
        .load_sample_meals(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoadSampleDataResponse {
        success: true,
        message: format!("Loaded {} sample meals", loaded.loaded),
        total_meals: loaded.total_meals,
    }))
}
