use super::handlers::get_health::{__path_get_health, get_health};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_health))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/", root_path), get(get_health))
}

#[cfg(test)]
mod tests {
    use axum::http::{
        HeaderValue,
        header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN},
    };
    use serde_json::Value;
    use wiremock::MockServer;

    use crate::application::http::test::{test_args, test_server, test_server_with_args};

    #[tokio::test]
    async fn reports_healthy() {
        let llm = MockServer::start().await;
        let server = test_server(&llm).await;

        let response = server.get("/").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "TasteFusion API");
    }

    #[tokio::test]
    async fn serves_openapi_document() {
        let llm = MockServer::start().await;
        let server = test_server(&llm).await;

        let doc: Value = server.get("/api-docs/openapi.json").await.json();
        assert!(doc["paths"]["/meals"].is_object());
        assert!(doc["paths"]["/generate-recipe"].is_object());
    }

    #[tokio::test]
    async fn any_origin_is_allowed_without_credentials() {
        let llm = MockServer::start().await;
        let server = test_server(&llm).await;

        let response = server
            .get("/")
            .add_header(ORIGIN, HeaderValue::from_static("http://example.com"))
            .await;

        let headers = response.headers();
        assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert!(headers.get(ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    }

    #[tokio::test]
    async fn listed_origins_are_allowed_with_credentials() {
        let llm = MockServer::start().await;
        let mut args = test_args(&llm.uri());
        args.server.allowed_origins = vec![
            "http://localhost:3000".to_string(),
            "http://localhost:5173".to_string(),
        ];
        let server = test_server_with_args(args).await;

        let allowed = server
            .get("/")
            .add_header(ORIGIN, HeaderValue::from_static("http://localhost:5173"))
            .await;
        let headers = allowed.headers();
        assert_eq!(
            headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
        assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");

        let other = server
            .get("/")
            .add_header(ORIGIN, HeaderValue::from_static("http://evil.example"))
            .await;
        assert!(other.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
