use axum::{extract::Request, middleware::Next, response::Response};
use tastefusion_core::domain::session::SessionId;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const SESSION_HEADER: &str = "x-session-id";

/// Session context stored in request extensions
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub session_id: SessionId,
}

/// Resolves the caller's session from the `x-session-id` header.
/// Requests without the header share the default session; unreadable or
/// over-long values are rejected with 400.
pub async fn session_middleware(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let raw = match req.headers().get(SESSION_HEADER) {
        Some(value) => value.to_str().map_err(|_| {
            ApiError::BadRequest(format!("{} must be visible ASCII", SESSION_HEADER))
        })?,
        None => "",
    };

    let session_id = SessionId::parse(raw).map_err(ApiError::from)?;

    req.extensions_mut().insert(SessionContext { session_id });

    Ok(next.run(req).await)
}
