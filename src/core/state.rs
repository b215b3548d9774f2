use std::sync::Arc;

use crate::communication::supervisor::SupervisorClient;
use crate::platform::flows::ConfigEntryFlows;

/// Shared state for the discovery relay.
///
/// Holds read-only handles to the two collaborators the relay glues
/// together: the supervisor API client and the platform's config entry flow
/// manager. Cloning is cheap; the HTTP view and every spawned processing
/// task carry their own clone.
#[derive(Clone)]
pub struct DiscoveryState {
    supervisor: Arc<SupervisorClient>,
    flows: Arc<dyn ConfigEntryFlows>,
}

impl DiscoveryState {
    pub fn new(supervisor: Arc<SupervisorClient>, flows: Arc<dyn ConfigEntryFlows>) -> Self {
        Self { supervisor, flows }
    }

    /// Returns the supervisor API client.
    pub fn supervisor(&self) -> &SupervisorClient {
        &self.supervisor
    }

    /// Returns the platform's config entry flow manager.
    pub fn flows(&self) -> &dyn ConfigEntryFlows {
        self.flows.as_ref()
    }
}

impl std::fmt::Debug for DiscoveryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryState")
            .field("supervisor", &self.supervisor)
            .field("flows", &"<config entry flows>")
            .finish()
    }
}
