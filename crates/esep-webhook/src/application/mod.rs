//! Application Layer (Use Cases)
//!
//! Orchestrates the domain and ports for one webhook invocation.

mod context;
mod issue_notifier;

pub use context::InvocationContext;
pub use issue_notifier::IssueNotifier;
