//! The discovery relay: registration, startup replay, and per-message
//! processing.
//!
//! Live announcements arrive over the HTTP view in [`view`]; announcements
//! queued before the platform was ready are replayed once the startup signal
//! fires. Both paths funnel into [`process_new`].

pub mod view;

use axum::Router;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::communication::types::DiscoveryMessage;
use crate::core::state::DiscoveryState;
use crate::platform::flows::FlowContext;

/// Register the discovery relay.
///
/// Two things happen here:
/// 1. A listener task is spawned that waits once for the platform startup
///    signal and then replays every discovery message still queued on the
///    supervisor side.
/// 2. The HTTP view is built for the host to mount into its web server.
///
/// Returns the router together with the listener's join handle. The handle
/// resolves once replay scheduling is done (or was abandoned); hosts that
/// do not care can drop it.
pub fn setup_discovery(
    state: DiscoveryState,
    mut started: broadcast::Receiver<()>,
) -> (Router, JoinHandle<()>) {
    let replay_state = state.clone();
    let listener = tokio::spawn(async move {
        if started.recv().await.is_err() {
            debug!("startup signal dropped before firing; skipping discovery replay");
            return;
        }
        replay_discovery(replay_state).await;
    });

    (view::router(state), listener)
}

/// Fetch all queued discovery messages and schedule processing for each.
///
/// Every message is handed to its own spawned task: processing runs
/// concurrently, with no ordering guarantees between messages and no
/// guarantee of completion before platform startup finishes. A failure to
/// fetch the list abandons the whole replay; there is no retry.
async fn replay_discovery(state: DiscoveryState) {
    let messages = match state.supervisor().retrieve_discovery_messages().await {
        Ok(messages) => messages,
        Err(err) => {
            error!("can't read discovery info: {err}");
            return;
        }
    };

    for message in messages {
        let state = state.clone();
        tokio::spawn(async move {
            process_new(&state, message).await;
        });
    }
}

/// Process a new discovery announcement.
///
/// Resolves the announcing add-on's display name, substitutes it for the
/// add-on identifier, and initiates a config flow for the announced service
/// with the message's configuration payload as seed data. Any failure drops
/// this message only; nothing propagates to the caller.
///
/// Returns the enriched message once it has been forwarded, `None` when the
/// message was abandoned.
pub async fn process_new(
    state: &DiscoveryState,
    mut message: DiscoveryMessage,
) -> Option<DiscoveryMessage> {
    let addon_info = match state.supervisor().get_addon_info(&message.addon).await {
        Ok(info) => info,
        Err(err) => {
            error!("can't read add-on info: {err}");
            return None;
        }
    };

    // Forward the display name instead of the raw add-on identifier.
    message.addon = addon_info.name;

    debug!(
        service = %message.service,
        addon = %message.addon,
        "initiating config flow for discovered service"
    );
    if let Err(err) = state
        .flows()
        .async_init(&message.service, FlowContext::hassio(), message.config.clone())
        .await
    {
        warn!(service = %message.service, "{err}");
    }
    Some(message)
}

/// Process a discovery removal notification.
pub async fn process_del(_state: &DiscoveryState, message: DiscoveryMessage) {
    // TODO: tear down whatever the matching process_new created once the
    // supervisor defines removal semantics for discovery messages.
    debug!(service = %message.service, "discovery removal received; no handler yet");
}
