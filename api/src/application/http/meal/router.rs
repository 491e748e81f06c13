use super::handlers::{
    clear_meals::{__path_clear_meals, clear_meals},
    create_meal::{__path_create_meal, create_meal},
    delete_meal::{__path_delete_meal, delete_meal},
    get_meals::{__path_get_meals, get_meals},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};
use axum::{
    Router, middleware,
    routing::{delete, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_meal, get_meals, clear_meals, delete_meal))]
pub struct MealApiDoc;

pub fn meal_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/meals", state.args.server.root_path),
            post(create_meal).get(get_meals).delete(clear_meals),
        )
        .route(
            &format!("{}/meals/{{index}}", state.args.server.root_path),
            delete(delete_meal),
        )
        .layer(middleware::from_fn(session_middleware))
}
