//! Configuration loader
//!
//! ## Environment Variables
//! - `VAGTPORTAL_CMS_URL`: Base URL of the CMS API including the `/api`
//!   prefix (required)
//! - `VAGTPORTAL_HTTP_TIMEOUT_SECS`: Per-request timeout in seconds
//!   (optional)
//! - `VAGTPORTAL_SESSION_PATH`: Path of the persisted session file
//!   (optional)

use url::Url;
use vagtportal_domain::constants::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SESSION_PATH};
use vagtportal_domain::{CmsConfig, PortalConfig, PortalError, Result, SessionConfig};

/// Load configuration from the environment, honouring a `.env` file when
/// one is present next to the shell.
///
/// # Errors
/// Returns `PortalError::Config` if required variables are missing or have
/// invalid values.
pub fn load() -> Result<PortalConfig> {
    dotenvy::dotenv().ok();
    load_from_env()
}

/// Load configuration from environment variables only.
///
/// # Errors
/// Returns `PortalError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<PortalConfig> {
    let base_url = env_var("VAGTPORTAL_CMS_URL")?;
    Url::parse(&base_url)
        .map_err(|e| PortalError::Config(format!("Invalid VAGTPORTAL_CMS_URL: {e}")))?;

    let request_timeout_secs = match std::env::var("VAGTPORTAL_HTTP_TIMEOUT_SECS") {
        Ok(raw) => raw.parse::<u64>().map_err(|e| {
            PortalError::Config(format!("Invalid VAGTPORTAL_HTTP_TIMEOUT_SECS: {e}"))
        })?,
        Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
    };

    let session_path = std::env::var("VAGTPORTAL_SESSION_PATH")
        .unwrap_or_else(|_| DEFAULT_SESSION_PATH.to_string());

    Ok(PortalConfig {
        cms: CmsConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout_secs,
        },
        session: SessionConfig { path: session_path },
    })
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| PortalError::Config(format!("{name} is not set")))
}
