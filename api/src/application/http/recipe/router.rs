use super::handlers::{
    generate_recipe::{__path_generate_recipe, generate_recipe},
    generate_weekly_menu::{__path_generate_weekly_menu, generate_weekly_menu},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};
use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe, generate_weekly_menu))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/generate-recipe", state.args.server.root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/generate-weekly-menu", state.args.server.root_path),
            post(generate_weekly_menu),
        )
        .layer(middleware::from_fn(session_middleware))
}
