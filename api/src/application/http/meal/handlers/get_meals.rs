use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use tastefusion_core::domain::meal::{entities::Meal, ports::MealService};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMealsResponse {
    pub meals: Vec<Meal>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/meals",
    tag = "meal",
    summary = "List meals",
    description = "Returns the meal history in the order it was logged",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    responses(
        (status = 200, body = GetMealsResponse)
    )
)]
pub async fn get_meals(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<GetMealsResponse>, ApiError> {
    let meals = state
        .service
        .get_meals(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMealsResponse {
        count: meals.len(),
        meals,
    }))
}
