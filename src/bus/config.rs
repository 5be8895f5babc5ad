//! Bus configuration.

use serde::Deserialize;

/// What happens when an event listener fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerFailurePolicy {
    /// The first failure stops delivery of that event and of every event
    /// still queued by the same `execute`/`publish` call, and is returned
    /// to the caller.
    #[default]
    Propagate,
    /// Failures are logged at warn level and delivery continues with the
    /// next listener.
    Isolate,
}

/// Settings for a [`LocalMessageBus`](crate::LocalMessageBus).
///
/// ```ignore
/// let config: BusConfig = serde_json::from_str(r#"{ "listener_failure": "isolate" }"#)?;
/// let bus = LocalMessageBus::with_config(&TracingLoggerFactory::default(), config);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    pub listener_failure: ListenerFailurePolicy,
}

impl BusConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_failure(mut self, policy: ListenerFailurePolicy) -> Self {
        self.listener_failure = policy;
        self
    }
}
