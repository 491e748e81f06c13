use super::handlers::get_profile::{__path_get_profile, get_profile};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_profile))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profile", state.args.server.root_path),
            get(get_profile),
        )
        .layer(middleware::from_fn(session_middleware))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use wiremock::MockServer;

    use crate::application::http::test::test_server;

    #[tokio::test]
    async fn empty_history_has_neutral_profile() {
        let llm = MockServer::start().await;
        let server = test_server(&llm).await;

        let profile: Value = server.get("/profile").await.json();
        assert_eq!(profile["meal_count"], 0);
        assert_eq!(profile["home_vs_outside_ratio"], 0.5);
        assert_eq!(profile["favorite_cuisines"], json!([]));
    }

    #[tokio::test]
    async fn profile_of_sample_data() {
        let llm = MockServer::start().await;
        let server = test_server(&llm).await;

        server.post("/load-sample-data").await.assert_status_ok();

        let profile: Value = server.get("/profile").await.json();
        assert_eq!(profile["meal_count"], 8);
        assert_eq!(profile["home_vs_outside_ratio"], 0.375);
        assert_eq!(profile["favorite_cuisines"][0], "Indian");
    }
}
