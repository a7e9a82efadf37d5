//! SlackNotification Entity
//!
//! Body posted to a Slack incoming webhook.

use serde::Serialize;

/// Prefix prepended to the issue URL
pub const ISSUE_CREATED_PREFIX: &str = "Issue Created: ";

/// Slack incoming-webhook message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackNotification {
    pub text: String,
}

impl SlackNotification {
    /// Notification announcing a newly created issue
    pub fn issue_created(issue_url: &str) -> Self {
        Self {
            text: format!("{ISSUE_CREATED_PREFIX}{issue_url}"),
        }
    }
}
