use axum::{Extension, extract::State};
use tastefusion_core::domain::taste_profile::{
    entities::TasteProfile, ports::TasteProfileService,
};

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

#[utoipa::path(
    get,
    path = "/profile",
    tag = "profile",
    summary = "Taste profile",
    description = "Aggregates the meal history into favorite cuisines, flavors and ingredients",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
    responses(
        (status = 200, body = TasteProfile)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<TasteProfile>, ApiError> {
    let profile = state
        .service
        .get_taste_profile(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
