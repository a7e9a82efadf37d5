//! Invocation Context
//!
//! Per-invocation logging context supplied by the host.

use tracing::Span;
use uuid::Uuid;

/// Identifies one handler invocation in log output
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub request_id: Uuid,
}

impl InvocationContext {
    /// Context with a fresh request id
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
        }
    }

    /// Context reusing an id assigned by the caller
    pub fn with_request_id(request_id: Uuid) -> Self {
        Self { request_id }
    }

    /// Span that every log line of the invocation is recorded under
    pub fn span(&self) -> Span {
        tracing::info_span!("invocation", request_id = %self.request_id)
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}
