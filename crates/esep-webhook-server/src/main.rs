use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod adapters;
mod routes;

use adapters::HttpWebhook;
use esep_webhook::{ConfigSource, IssueNotifier, ProcessEnv, SLACK_URL};

/// Listen address when `BIND_ADDR` is unset
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Issue notifier wired to the reqwest adapter
pub type AppNotifier = IssueNotifier<HttpWebhook, dyn ConfigSource>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub notifier: Arc<AppNotifier>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🪝 Esep webhook initializing...");

    let config: Arc<dyn ConfigSource> = Arc::new(ProcessEnv);
    if config.get_non_empty(SLACK_URL).is_none() {
        tracing::warn!("⚠️  No SLACK_URL set - invocations will fail until it is configured");
    }

    // One client for the life of the process
    let http_webhook = Arc::new(HttpWebhook::new().context("Failed to build HTTP client")?);
    let notifier = Arc::new(IssueNotifier::new(http_webhook, config));

    tracing::info!("🔔 Slack notifier initialized");

    let state = AppState { notifier };
    let router = routes::app(state);

    let addr = ProcessEnv
        .get_non_empty("BIND_ADDR")
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!(addr = %addr, "✅ Esep webhook ready");

    axum::serve(listener, router)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
