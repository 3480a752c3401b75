//! User profile and session types
//!
//! The profile is an immutable snapshot captured at login time; it is not
//! refreshed automatically.

use serde::{Deserialize, Serialize};

/// Portal user as returned by the CMS auth endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    pub confirmed: bool,
    pub blocked: bool,
}

/// Authenticated session state
///
/// Invariant: `user` is only present when `token` is present. A token
/// without a profile is a valid (if degraded) logged-in session; the
/// reverse is not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    /// A session counts as logged in as soon as a token is present.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}
