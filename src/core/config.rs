//! Supervisor connection settings.

use url::Url;

use crate::core::error::ConfigError;

/// Default supervisor API base when `SUPERVISOR_API` is unset. Inside a
/// managed installation the supervisor is reachable under this hostname.
pub const DEFAULT_SUPERVISOR_URL: &str = "http://supervisor/";

const ENV_SUPERVISOR_API: &str = "SUPERVISOR_API";
const ENV_SUPERVISOR_TOKEN: &str = "SUPERVISOR_TOKEN";

/// Where and how to reach the supervisor API.
#[derive(Debug, Clone)]
pub struct SupervisorConfig {
    /// Base URL of the supervisor API.
    pub api_url: Url,
    /// Bearer token attached to every request, when present.
    pub token: Option<String>,
}

impl SupervisorConfig {
    pub fn new(api_url: Url, token: Option<String>) -> Self {
        Self { api_url, token }
    }

    /// Build the configuration from `SUPERVISOR_API` and `SUPERVISOR_TOKEN`.
    ///
    /// `SUPERVISOR_API` falls back to [`DEFAULT_SUPERVISOR_URL`]; a missing
    /// token is allowed (some development setups run an open supervisor).
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw =
            std::env::var(ENV_SUPERVISOR_API).unwrap_or_else(|_| DEFAULT_SUPERVISOR_URL.to_string());
        let api_url = raw
            .parse()
            .map_err(|err| ConfigError::Invalid(format!("bad supervisor URL {raw:?}: {err}")))?;
        let token = std::env::var(ENV_SUPERVISOR_TOKEN).ok();
        Ok(Self { api_url, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_parses() {
        let url: Url = DEFAULT_SUPERVISOR_URL.parse().unwrap();
        assert_eq!(url.host_str(), Some("supervisor"));
    }

    #[test]
    fn explicit_config_keeps_token() {
        let config = SupervisorConfig::new(
            "http://127.0.0.1:8123/".parse().unwrap(),
            Some("abc".to_string()),
        );
        assert_eq!(config.token.as_deref(), Some("abc"));
    }
}
