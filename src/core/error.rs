use thiserror::Error;

use crate::communication::supervisor::SupervisorApiError;
use crate::platform::flows::FlowError;

/// Errors surfaced by the discovery relay.
///
/// Every failure while handling a single discovery message is contained to
/// that message; nothing here is fatal to the host platform.
#[derive(Debug, Error)]
pub enum Error {
    /// The supervisor API rejected or failed a request.
    #[error("supervisor API error: {0}")]
    Supervisor(#[from] SupervisorApiError),

    /// The platform refused to start a config flow.
    #[error("config flow error: {0}")]
    Flow(#[from] FlowError),

    /// Invalid relay configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while assembling the relay configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::communication::supervisor::SupervisorApiError;

    #[test]
    fn external_failures_convert_into_the_crate_error() {
        let err = Error::from(SupervisorApiError::MissingData);
        assert!(matches!(err, Error::Supervisor(_)));
        assert_eq!(
            err.to_string(),
            "supervisor API error: supervisor response contained no data"
        );

        let err = Error::from(ConfigError::Invalid("bad URL".to_string()));
        assert_eq!(err.to_string(), "configuration error: invalid configuration: bad URL");
    }
}
