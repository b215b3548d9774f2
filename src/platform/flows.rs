//! Config entry flow initiation.
//!
//! The flow subsystem is owned by the host platform; the relay only ever
//! initiates flows. Hosts implement [`ConfigEntryFlows`] and hand the relay
//! an `Arc<dyn ConfigEntryFlows>`.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Origin a config flow is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowSource {
    /// Seeded by a supervisor discovery message.
    Hassio,
}

/// Context attached to a flow initiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowContext {
    pub source: FlowSource,
}

impl FlowContext {
    /// Context for flows seeded by supervisor discovery.
    pub fn hassio() -> Self {
        Self {
            source: FlowSource::Hassio,
        }
    }
}

/// Error returned by the platform when a flow could not be started.
#[derive(Debug, Error)]
#[error("config flow initiation failed: {0}")]
pub struct FlowError(String);

impl FlowError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// The platform's config entry flow manager.
#[async_trait]
pub trait ConfigEntryFlows: Send + Sync {
    /// Begin a config flow for `service`, seeded with `data`.
    async fn async_init(
        &self,
        service: &str,
        context: FlowContext,
        data: Value,
    ) -> Result<(), FlowError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flow_source_serializes_lowercase() {
        let context = FlowContext::hassio();
        assert_eq!(serde_json::to_value(context).unwrap(), json!({"source": "hassio"}));
    }
}
