//! Esep Webhook Routes
//!
//! - /webhook/github - GitHub issue webhook deliveries
//! - /health - Liveness check
//! - /swagger-ui - API documentation

pub mod github;
pub mod health;
pub mod swagger;

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(health::router())
        .merge(github::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
