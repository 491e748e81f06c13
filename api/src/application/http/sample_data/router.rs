use super::handlers::load_sample_data::{__path_load_sample_data, load_sample_data};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};
use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(load_sample_data))]
pub struct SampleDataApiDoc;

pub fn sample_data_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/load-sample-data", state.args.server.root_path),
            post(load_sample_data),
        )
        .layer(middleware::from_fn(session_middleware))
}
