//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the handler interacts with
//! the outside world (outbound HTTP, configuration).
//!
//! Implementations of these traits live in the hosting binary.

mod config;
mod webhook;

// Re-exports
pub use config::*;
pub use webhook::*;
