//! Issue Notifier Application Service (Use Case)
//!
//! Forwards a GitHub "issue created" delivery to Slack.

use std::sync::Arc;

use tracing::{debug, error, info, Instrument};

use crate::application::InvocationContext;
use crate::domain::{HandlerError, IssueEvent, SlackNotification};
use crate::ports::{ConfigSource, OutboundWebhook, ProcessEnv, SLACK_URL};

/// Application service handling one webhook delivery per call
///
/// Holds no per-invocation state; a single instance is shared by all
/// concurrent invocations.
pub struct IssueNotifier<W: OutboundWebhook, C: ConfigSource + ?Sized = ProcessEnv> {
    outbound: Arc<W>,
    config: Arc<C>,
}

impl<W: OutboundWebhook, C: ConfigSource + ?Sized> IssueNotifier<W, C> {
    pub fn new(outbound: Arc<W>, config: Arc<C>) -> Self {
        Self { outbound, config }
    }

    /// Handle one delivery and return the Slack response body
    ///
    /// `event` is the delivery body exactly as received. Fails fast: nothing
    /// is retried and every error is logged once, then returned to the caller.
    pub async fn handle(
        &self,
        event: &[u8],
        ctx: &InvocationContext,
    ) -> Result<String, HandlerError> {
        async {
            info!(event = %String::from_utf8_lossy(event), "Handler received event");

            self.process(event)
                .await
                .inspect_err(|e| error!(error = %e, "Error handling issue event"))
        }
        .instrument(ctx.span())
        .await
    }

    async fn process(&self, raw: &[u8]) -> Result<String, HandlerError> {
        let event = IssueEvent::parse(raw)?;
        let issue_url = event.require_issue_url()?;

        let slack_url = self
            .config
            .get_non_empty(SLACK_URL)
            .ok_or(HandlerError::MissingConfiguration(SLACK_URL))?;

        let notification = SlackNotification::issue_created(issue_url);
        let body = serde_json::to_vec(&notification).map_err(HandlerError::Serialize)?;

        debug!(issue_url = %issue_url, "Posting issue notification to Slack");
        let response = self.outbound.post_json(&slack_url, body).await?;

        if !response.is_success() {
            return Err(HandlerError::OutboundRequestFailed {
                status: response.status,
                body: Some(response.body).filter(|b| !b.is_empty()),
            });
        }

        info!(status = %response.status, "Slack notification delivered");
        Ok(response.body)
    }
}
