//! Domain Errors
//!
//! Failure taxonomy for a single handler invocation.

use thiserror::Error;

/// Errors raised while handling one webhook delivery
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Invalid JSON in event: {0}")]
    Parse(serde_json::Error),

    #[error("No issue URL found in the payload")]
    MissingIssueUrl,

    #[error("{0} environment variable is not set")]
    MissingConfiguration(&'static str),

    #[error("Failed to serialize notification: {0}")]
    Serialize(serde_json::Error),

    #[error("Outbound request failed with status {status}")]
    OutboundRequestFailed { status: u16, body: Option<String> },

    #[error("Network error: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration_names_variable() {
        let err = HandlerError::MissingConfiguration("SLACK_URL");
        assert_eq!(err.to_string(), "SLACK_URL environment variable is not set");
    }

    #[test]
    fn test_serialize_failure_is_not_reported_as_bad_event() {
        // Maps with non-string keys cannot be encoded as JSON objects
        let source = serde_json::to_vec(&std::collections::HashMap::from([((1, 2), 3)]))
            .unwrap_err();
        let err = HandlerError::Serialize(source);

        assert!(err.to_string().starts_with("Failed to serialize notification"));
        assert!(!err.to_string().contains("Invalid JSON in event"));
    }
}
