//! HTTP view the supervisor pushes discovery notifications to.
//!
//! One route, two verbs. POST announces a new discovery by uuid; DELETE
//! carries the message to remove in its body. Both answer with an empty
//! body; the supervisor only looks at the status code.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use axum::routing::post;
use axum::Router;
use tracing::{debug, error};

use super::{process_del, process_new};
use crate::communication::types::DiscoveryMessage;
use crate::core::state::DiscoveryState;

/// Route the supervisor is configured to push discovery events to.
pub const DISCOVERY_PATH: &str = "/api/hassio_push/discovery/{uuid}";

/// Build the discovery view router for mounting into the host server.
pub fn router(state: DiscoveryState) -> Router {
    Router::new()
        .route(DISCOVERY_PATH, post(post_discovery).delete(delete_discovery))
        .with_state(state)
}

/// Error responses of the discovery view.
#[derive(Debug)]
enum ViewError {
    /// The supervisor could not deliver the referenced message.
    ServiceUnavailable,
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        match self {
            ViewError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        }
    }
}

/// Handle a new discovery notification.
async fn post_discovery(
    State(state): State<DiscoveryState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ViewError> {
    // Fetch the message by uuid instead of trusting the request body.
    let message = match state.supervisor().get_discovery_message(&uuid).await {
        Ok(message) => message,
        Err(err) => {
            error!("can't read discovery data: {err}");
            return Err(ViewError::ServiceUnavailable);
        }
    };

    process_new(&state, message).await;
    Ok(StatusCode::OK)
}

/// Handle a discovery removal notification.
///
/// The removal path carries the message in the body rather than looking it
/// up by uuid, and always answers 200. Malformed bodies are logged and
/// dropped.
async fn delete_discovery(State(state): State<DiscoveryState>, body: Bytes) -> StatusCode {
    match serde_json::from_slice::<DiscoveryMessage>(&body) {
        Ok(message) => process_del(&state, message).await,
        Err(err) => debug!("ignoring malformed discovery removal body: {err}"),
    }
    StatusCode::OK
}
