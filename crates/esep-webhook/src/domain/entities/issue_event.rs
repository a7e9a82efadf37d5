//! IssueEvent Entity
//!
//! A GitHub issue webhook delivery. No schema is enforced; the payload is
//! kept as a generic JSON value and only `issue.html_url` is ever read.

use serde_json::Value;

use crate::domain::errors::HandlerError;

/// Inbound GitHub issue event
#[derive(Debug, Clone)]
pub struct IssueEvent {
    payload: Value,
}

impl IssueEvent {
    /// Parse a raw delivery body; invalid UTF-8 is a parse error
    pub fn parse(raw: &[u8]) -> Result<Self, HandlerError> {
        let payload = serde_json::from_slice(raw).map_err(HandlerError::Parse)?;
        Ok(Self { payload })
    }

    /// The issue's `html_url`, if present as a non-empty string
    pub fn issue_url(&self) -> Option<&str> {
        self.payload
            .get("issue")
            .and_then(|issue| issue.get("html_url"))
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Like [`issue_url`](Self::issue_url), but fails with `MissingIssueUrl`
    pub fn require_issue_url(&self) -> Result<&str, HandlerError> {
        self.issue_url().ok_or(HandlerError::MissingIssueUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_issue_url() {
        let event = IssueEvent::parse(
            br#"{"action":"opened","issue":{"html_url":"https://github.com/org/repo/issues/1","number":1}}"#,
        )
        .unwrap();

        assert_eq!(
            event.issue_url(),
            Some("https://github.com/org/repo/issues/1")
        );
    }

    #[test]
    fn test_missing_issue_url_variants() {
        let cases = [
            json!({}),
            json!({ "issue": null }),
            json!({ "issue": {} }),
            json!({ "issue": { "html_url": null } }),
            json!({ "issue": { "html_url": "" } }),
            json!({ "issue": { "html_url": 42 } }),
            json!({ "issue": "https://github.com/org/repo/issues/1" }),
            json!([1, 2, 3]),
        ];

        for payload in cases {
            let event = IssueEvent::parse(payload.to_string().as_bytes()).unwrap();
            assert!(
                matches!(event.require_issue_url(), Err(HandlerError::MissingIssueUrl)),
                "expected MissingIssueUrl for {payload}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let result = IssueEvent::parse(b"not json at all");
        assert!(matches!(result, Err(HandlerError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let result = IssueEvent::parse(b"{\"issue\":{\"html_url\":\"https://x/\xFF\"}}");
        assert!(matches!(result, Err(HandlerError::Parse(_))));
    }
}
