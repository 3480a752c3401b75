//! Conversions from external infrastructure errors into domain errors.

use vagtportal_domain::PortalError;

/// Error newtype that keeps conversions on the infrastructure side and can
/// be converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PortalError);

impl From<InfraError> for PortalError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PortalError> for InfraError {
    fn from(value: PortalError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PortalError */
/* -------------------------------------------------------------------------- */

impl From<reqwest::Error> for InfraError {
    fn from(err: reqwest::Error) -> Self {
        let mapped = if err.is_timeout() {
            PortalError::Network(format!("http request timed out: {err}"))
        } else if err.is_connect() {
            PortalError::Network(format!("connection failed: {err}"))
        } else if err.is_decode() {
            PortalError::InvalidInput(format!("failed to decode response body: {err}"))
        } else if err.is_builder() {
            PortalError::Internal(format!("failed to build http request: {err}"))
        } else {
            PortalError::Network(format!("http request failed: {err}"))
        };

        InfraError(mapped)
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → PortalError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(err: serde_json::Error) -> Self {
        InfraError(PortalError::InvalidInput(format!("invalid JSON payload: {err}")))
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → PortalError */
/* -------------------------------------------------------------------------- */

impl From<std::io::Error> for InfraError {
    fn from(err: std::io::Error) -> Self {
        InfraError(PortalError::Storage(format!("filesystem operation failed: {err}")))
    }
}
