//! Wire types exchanged with the supervisor.
//!
//! The supervisor owns these structures; the relay deserializes what it
//! needs and passes the rest through untouched. Nothing here is validated
//! beyond what serde requires.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A queued announcement that an add-on exposes a consumable service.
///
/// Produced and stored by the supervisor. The relay applies exactly one
/// mutation before forwarding: `addon` is overwritten with the add-on's
/// display name. Keys the relay does not know about are carried along in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryMessage {
    /// Message identifier assigned by the supervisor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    /// Add-on identifier; replaced with the display name during processing.
    pub addon: String,
    /// Service key the config flow is initiated for.
    pub service: String,
    /// Opaque configuration payload, forwarded verbatim as flow seed data.
    #[serde(default)]
    pub config: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The slice of extended add-on metadata the relay consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonInfo {
    /// Human-readable add-on name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Envelope wrapping every supervisor API response.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// `"ok"` on success, `"error"` otherwise.
    pub result: String,
    pub data: Option<T>,
    /// Error detail when `result` is not `"ok"`.
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        self.result == "ok"
    }
}

/// Payload of the outstanding-discovery listing.
#[derive(Debug, Deserialize)]
pub struct DiscoveryList {
    #[serde(default)]
    pub discovery: Vec<DiscoveryMessage>,
}
