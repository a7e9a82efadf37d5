//! Outbound Webhook Port
//!
//! Abstract interface for POSTing a JSON body to an external endpoint.
//! One long-lived implementation is built at process start and shared
//! across invocations for connection reuse.

use async_trait::async_trait;

use crate::domain::errors::HandlerError;

/// Content type sent with every outbound notification
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Completed outbound call, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundResponse {
    pub status: u16,
    pub body: String,
}

impl OutboundResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound HTTP capability
///
/// # Example
///
/// ```rust,ignore
/// use esep_webhook::ports::OutboundWebhook;
///
/// struct HttpWebhook { /* reqwest client */ }
///
/// #[async_trait]
/// impl OutboundWebhook for HttpWebhook {
///     async fn post_json(&self, url: &str, body: Vec<u8>)
///         -> Result<OutboundResponse, HandlerError>
///     {
///         // Send HTTP POST with JSON_CONTENT_TYPE
///     }
/// }
/// ```
#[async_trait]
pub trait OutboundWebhook: Send + Sync {
    /// POST `body` to `url` with [`JSON_CONTENT_TYPE`]
    ///
    /// Returns the response for any completed exchange, including non-2xx
    /// statuses. Transport failures map to `HandlerError::Network`.
    async fn post_json(&self, url: &str, body: Vec<u8>)
        -> Result<OutboundResponse, HandlerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success_range() {
        assert!(OutboundResponse::new(200, "ok").is_success());
        assert!(OutboundResponse::new(204, "").is_success());
        assert!(!OutboundResponse::new(199, "").is_success());
        assert!(!OutboundResponse::new(302, "").is_success());
        assert!(!OutboundResponse::new(500, "no_service").is_success());
    }
}
