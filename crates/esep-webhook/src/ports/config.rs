//! Configuration Port
//!
//! Source of named string settings, read at invocation time.

use std::collections::HashMap;

/// Destination Slack incoming-webhook URL
pub const SLACK_URL: &str = "SLACK_URL";

/// Named configuration values
pub trait ConfigSource: Send + Sync {
    /// Raw value for `key`, if set
    fn get(&self, key: &str) -> Option<String>;

    /// Value for `key`, treating empty strings as unset
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.is_empty())
    }
}

/// Reads from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory settings
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    values: HashMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigSource for StaticConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
