//! Domain Entities
//!
//! - IssueEvent: inbound GitHub issue webhook delivery
//! - SlackNotification: outbound Slack incoming-webhook message

mod issue_event;
mod notification;

pub use issue_event::*;
pub use notification::*;
