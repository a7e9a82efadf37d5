//! Esep Webhook Domain Library
//!
//! Turns a GitHub "issue created" webhook delivery into a Slack
//! incoming-webhook notification.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Inbound event, outbound notification, errors
//! - **Ports** (`ports/`): Outbound HTTP and configuration interfaces
//! - **Application** (`application/`): The `IssueNotifier` use case
//!
//! Adapters for the ports (reqwest, process environment) are wired up by the
//! hosting binary.
//!
//! # Usage
//!
//! ```rust,ignore
//! use esep_webhook::{InvocationContext, IssueNotifier, ProcessEnv};
//!
//! let notifier = IssueNotifier::new(outbound, Arc::new(ProcessEnv));
//! let body = notifier.handle(raw_event, &InvocationContext::new()).await?;
//! ```

pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use application::{InvocationContext, IssueNotifier};
pub use domain::{HandlerError, IssueEvent, SlackNotification};
pub use ports::{
    ConfigSource, OutboundResponse, OutboundWebhook, ProcessEnv, StaticConfig, SLACK_URL,
};
