//! Shared harness: a recording flow manager and a relay wired against a
//! wiremock supervisor.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use wiremock::MockServer;

use hassio_discovery::prelude::*;

/// One recorded `async_init` call.
#[derive(Debug, Clone)]
pub struct InitiatedFlow {
    pub service: String,
    pub context: FlowContext,
    pub data: Value,
}

/// Config entry flow manager that records every initiation.
#[derive(Default)]
pub struct RecordingFlows {
    initiated: Mutex<Vec<InitiatedFlow>>,
    reject: bool,
}

impl RecordingFlows {
    /// A manager that rejects every initiation after recording it.
    pub fn rejecting() -> Self {
        Self {
            initiated: Mutex::new(Vec::new()),
            reject: true,
        }
    }

    pub async fn initiated(&self) -> Vec<InitiatedFlow> {
        self.initiated.lock().await.clone()
    }
}

#[async_trait]
impl ConfigEntryFlows for RecordingFlows {
    async fn async_init(
        &self,
        service: &str,
        context: FlowContext,
        data: Value,
    ) -> Result<(), FlowError> {
        self.initiated.lock().await.push(InitiatedFlow {
            service: service.to_string(),
            context,
            data,
        });
        if self.reject {
            return Err(FlowError::new("flow rejected"));
        }
        Ok(())
    }
}

/// Token the harness configures on the supervisor client; mocks match on it.
pub const TEST_TOKEN: &str = "test-token";

/// Relay state pointed at the given mock supervisor.
pub fn relay_state(supervisor: &MockServer, flows: Arc<RecordingFlows>) -> DiscoveryState {
    let client = SupervisorClient::new(SupervisorConfig::new(
        supervisor.uri().parse().unwrap(),
        Some(TEST_TOKEN.to_string()),
    ));
    DiscoveryState::new(Arc::new(client), flows)
}

/// Wrap a payload in the supervisor's success envelope.
pub fn ok_envelope(data: Value) -> Value {
    json!({"result": "ok", "data": data})
}

/// Wrap a message in the supervisor's error envelope.
pub fn error_envelope(message: &str) -> Value {
    json!({"result": "error", "message": message})
}

/// Poll until `expected` flows were initiated, or panic after five seconds.
pub async fn wait_for_flow_count(flows: &RecordingFlows, expected: usize) -> Vec<InitiatedFlow> {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let initiated = flows.initiated().await;
            if initiated.len() >= expected {
                return initiated;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("timed out waiting for config flow initiations")
}
