//! GitHub Webhook Routes
//!
//! Each delivery is one invocation of the issue notifier. The body is
//! handed over as raw bytes; all decoding happens in the handler.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use uuid::Uuid;

use esep_webhook::InvocationContext;

use crate::AppState;

/// Delivery GUID header set by GitHub
const GITHUB_DELIVERY_HEADER: &str = "x-github-delivery";

/// Use GitHub's delivery id as the request id when it is a valid UUID
fn invocation_context(headers: &HeaderMap) -> InvocationContext {
    headers
        .get(GITHUB_DELIVERY_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
        .map(InvocationContext::with_request_id)
        .unwrap_or_default()
}

/// Receive a GitHub issue event and forward it to Slack
///
/// Every failure maps to 500 with the error message as body.
#[utoipa::path(
    post,
    path = "/webhook/github",
    request_body(
        content = String,
        description = "GitHub issue webhook payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Slack response body", body = String),
        (status = 500, description = "Invocation failed", body = String)
    ),
    tag = "Webhook"
)]
pub async fn receive_issue_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<String, (StatusCode, String)> {
    let ctx = invocation_context(&headers);

    state
        .notifier
        .handle(&body, &ctx)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/webhook/github", post(receive_issue_event))
}
