use std::sync::Arc;

use crate::application::http::health::router::health_routes;
use crate::application::http::meal::router::meal_routes;
use crate::application::http::profile::router::profile_routes;
use crate::application::http::recipe::router::recipe_routes;
use crate::application::http::sample_data::router::sample_data_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tastefusion_core::{application::create_service, domain::common::TasteFusionConfig};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info_span, warn};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::session_middleware::SESSION_HEADER;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = TasteFusionConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            HeaderName::from_static(SESSION_HEADER),
        ]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(AllowOrigin::any());
    }

    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", origins);

    cors.allow_origin(origins).allow_credentials(true)
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins);

    let mut openapi = ApiDoc::build();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(health_routes(&root_path))
        .merge(meal_routes(state.clone()))
        .merge(profile_routes(state.clone()))
        .merge(recipe_routes(state.clone()))
        .merge(sample_data_routes(state.clone()))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}

/// Adds request metrics and the `/metrics` endpoint.
///
/// The Prometheus recorder is process-global, so this is applied once at
/// startup rather than inside [`router`].
pub fn with_metrics(router: Router, root_path: &str) -> Router {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    router
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
}
