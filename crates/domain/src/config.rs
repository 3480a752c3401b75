//! Portal configuration structures
//!
//! Typed configuration consumed by the infrastructure adapters. Loading from
//! the environment lives in `vagtportal-infra::config`.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CMS_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SESSION_PATH};

/// Top-level portal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    pub cms: CmsConfig,
    pub session: SessionConfig,
}

/// Remote content API (headless CMS) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    /// Base URL of the CMS API, including the `/api` prefix
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Persisted session storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the session file (token + serialized profile)
    pub path: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            cms: CmsConfig {
                base_url: DEFAULT_CMS_BASE_URL.to_string(),
                request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            },
            session: SessionConfig { path: DEFAULT_SESSION_PATH.to_string() },
        }
    }
}
