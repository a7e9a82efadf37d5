//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use super::health::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health_check,
        super::github::receive_issue_event,
    ),
    info(
        title = "Esep Webhook API",
        version = "0.1.0",
        description = "Forwards GitHub issue-created webhooks to a Slack incoming webhook.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Webhook", description = "Inbound GitHub webhook deliveries"),
    ),
    components(
        schemas(HealthCheck)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/webhook/github"));
    }
}
