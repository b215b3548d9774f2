//! Wiring to the supervisor: HTTP client and the types it exchanges.

pub mod supervisor;
pub mod types;

pub use supervisor::{SupervisorApiError, SupervisorClient};
pub use types::{AddonInfo, DiscoveryMessage};
