//! Supervisor add-on discovery relay.
//!
//! Companion add-ons announce the services they expose through the
//! supervisor, which queues a discovery message per announcement. This crate
//! turns those announcements into config entry flows on the host platform:
//! it mounts a small HTTP view the supervisor pushes to, replays the queued
//! messages once the platform signals startup, and enriches every message
//! with the announcing add-on's display name before the flow is initiated.
//!
//! The crate is a library; the host constructs [`DiscoveryState`] with its
//! own supervisor client and config-entry flow manager, then mounts the
//! router returned by [`setup_discovery`] into its web server.

pub mod communication;
pub mod core;
pub mod platform;
pub mod services;

pub use crate::communication::supervisor::{SupervisorApiError, SupervisorClient};
pub use crate::communication::types::{AddonInfo, DiscoveryMessage};
pub use crate::core::config::SupervisorConfig;
pub use crate::core::error::{ConfigError, Error, Result};
pub use crate::core::logging::init_logging;
pub use crate::core::state::DiscoveryState;
pub use crate::platform::flows::{ConfigEntryFlows, FlowContext, FlowError, FlowSource};
pub use crate::services::discovery::{process_del, process_new, setup_discovery};

/// Re-exports of the types most hosts need to wire the relay in.
pub mod prelude {
    pub use crate::communication::supervisor::{SupervisorApiError, SupervisorClient};
    pub use crate::communication::types::{AddonInfo, DiscoveryMessage};
    pub use crate::core::config::SupervisorConfig;
    pub use crate::core::error::{ConfigError, Error, Result};
    pub use crate::core::logging::init_logging;
    pub use crate::core::state::DiscoveryState;
    pub use crate::platform::flows::{ConfigEntryFlows, FlowContext, FlowError, FlowSource};
    pub use crate::services::discovery::setup_discovery;
}
