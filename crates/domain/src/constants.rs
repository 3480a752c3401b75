//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! portal.

// Shift retrieval configuration
pub const SHIFTS_PAGE_SIZE: u32 = 100;

// Persisted session entries (survive a reload of the consuming shell)
pub const SESSION_TOKEN_KEY: &str = "volunteer_jwt";
pub const SESSION_USER_KEY: &str = "volunteer_user";

// Calendar event title formatting
pub const SHIFT_TITLE_PREFIX: &str = "Vagt: ";
pub const INSTRUCTOR_SUFFIX: &str = " (Instruktør)";

// List view month keys ("2025-06")
pub const MONTH_KEY_FORMAT: &str = "%Y-%m";

// HTTP defaults
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CMS_BASE_URL: &str = "http://localhost:1337/api";
pub const DEFAULT_SESSION_PATH: &str = "vagtportal-session.json";
