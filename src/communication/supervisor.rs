//! Async HTTP client for the supervisor API.
//!
//! Only the three endpoints the relay needs are exposed. Every response is
//! wrapped in the supervisor's `result`/`data`/`message` envelope; any
//! network failure, decode failure, or non-`ok` result collapses into
//! [`SupervisorApiError`].

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::communication::types::{AddonInfo, ApiResponse, DiscoveryList, DiscoveryMessage};
use crate::core::config::SupervisorConfig;

/// Error raised by the supervisor client for any request that did not
/// produce a usable payload.
#[derive(Debug, Error)]
pub enum SupervisorApiError {
    /// Transport or decode failure.
    #[error("supervisor request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint path did not combine with the configured base URL.
    #[error("invalid supervisor endpoint: {0}")]
    Url(#[from] url::ParseError),

    /// The supervisor answered with `result != "ok"`.
    #[error("supervisor rejected the request: {message}")]
    Api { message: String },

    /// A successful envelope arrived without its `data` payload.
    #[error("supervisor response contained no data")]
    MissingData,
}

/// Client for the supervisor's REST API.
#[derive(Debug, Clone)]
pub struct SupervisorClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl SupervisorClient {
    /// Build a client from the given configuration.
    ///
    /// The base URL is normalized to end in `/` so endpoint paths join
    /// below it instead of replacing the last segment.
    pub fn new(config: SupervisorConfig) -> Self {
        let mut base_url = config.api_url;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
            token: config.token,
        }
    }

    /// Fetch all outstanding discovery messages.
    pub async fn retrieve_discovery_messages(
        &self,
    ) -> Result<Vec<DiscoveryMessage>, SupervisorApiError> {
        let list: DiscoveryList = self.get_json("discovery").await?;
        debug!("supervisor reported {} queued discovery messages", list.discovery.len());
        Ok(list.discovery)
    }

    /// Fetch a single discovery message by its identifier.
    pub async fn get_discovery_message(
        &self,
        uuid: &str,
    ) -> Result<DiscoveryMessage, SupervisorApiError> {
        self.get_json(&format!("discovery/{uuid}")).await
    }

    /// Fetch extended metadata for an add-on.
    pub async fn get_addon_info(&self, addon: &str) -> Result<AddonInfo, SupervisorApiError> {
        self.get_json(&format!("addons/{addon}/info")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SupervisorApiError> {
        let url = self.base_url.join(path)?;
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let envelope: ApiResponse<T> = response.json().await?;

        if !envelope.is_ok() || !status.is_success() {
            let message = envelope
                .message
                .unwrap_or_else(|| format!("supervisor returned HTTP {status}"));
            return Err(SupervisorApiError::Api { message });
        }
        envelope.data.ok_or(SupervisorApiError::MissingData)
    }
}
