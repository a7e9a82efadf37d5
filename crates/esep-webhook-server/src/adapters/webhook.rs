//! HTTP Webhook Implementation
//!
//! Delivers notifications to external endpoints using reqwest.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use esep_webhook::ports::JSON_CONTENT_TYPE;
use esep_webhook::{HandlerError, OutboundResponse, OutboundWebhook};

/// User-Agent header value
const USER_AGENT: &str = "Esep-Webhook/1.0";

/// HTTP implementation of OutboundWebhook
///
/// No request timeout is set; the client defaults apply.
pub struct HttpWebhook {
    client: Client,
}

impl HttpWebhook {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl OutboundWebhook for HttpWebhook {
    async fn post_json(
        &self,
        url: &str,
        body: Vec<u8>,
    ) -> Result<OutboundResponse, HandlerError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| HandlerError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| HandlerError::Network(format!("Failed to read response body: {e}")))?;

        Ok(OutboundResponse::new(status, body))
    }
}
