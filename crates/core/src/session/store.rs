//! Session store
//!
//! Holds the authentication token and user profile, mirrored to persistent
//! storage so a session survives a reload of the consuming shell.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};
use vagtportal_domain::constants::{SESSION_TOKEN_KEY, SESSION_USER_KEY};
use vagtportal_domain::{Session, UserProfile};

use super::ports::SessionStorage;

/// In-memory session state backed by a [`SessionStorage`] implementation.
///
/// Construction reads the persisted entries synchronously; a malformed
/// persisted profile is treated as logged-out and the offending entries
/// are cleared.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    session: RwLock<Session>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let session = Self::restore(storage.as_ref());
        Self { storage, session: RwLock::new(session) }
    }

    /// Store the token and profile. Succeeds unconditionally: the token was
    /// obtained upstream by the login request, so no network I/O happens
    /// here. Persistence failures degrade to an in-memory-only session.
    pub fn login(&self, user: UserProfile, token: &str) {
        if let Err(err) = self.storage.set(SESSION_TOKEN_KEY, token) {
            warn!(error = %err, "failed to persist session token");
        }
        match serde_json::to_string(&user) {
            Ok(serialized) => {
                if let Err(err) = self.storage.set(SESSION_USER_KEY, &serialized) {
                    warn!(error = %err, "failed to persist user profile");
                }
            }
            Err(err) => warn!(error = %err, "failed to serialize user profile"),
        }

        *self.session.write() = Session { token: Some(token.to_string()), user: Some(user) };
        info!("session established");
    }

    /// Clear token and profile. Idempotent: calling without a session is a
    /// no-op.
    pub fn logout(&self) {
        self.clear_storage();
        *self.session.write() = Session::default();
        info!("session cleared");
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_logged_in()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.read().token.clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.session.read().user.clone()
    }

    fn restore(storage: &dyn SessionStorage) -> Session {
        let token = match storage.get(SESSION_TOKEN_KEY) {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "failed to read persisted token; treating as logged out");
                None
            }
        };

        let Some(token) = token else {
            // A profile without a token violates the session invariant;
            // drop the stray entry.
            if let Err(err) = storage.remove(SESSION_USER_KEY) {
                debug!(error = %err, "failed to remove stray profile entry");
            }
            return Session::default();
        };

        match storage.get(SESSION_USER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => Session { token: Some(token), user: Some(user) },
                Err(err) => {
                    warn!(error = %err, "persisted profile is malformed; clearing session");
                    let _ = storage.remove(SESSION_TOKEN_KEY);
                    let _ = storage.remove(SESSION_USER_KEY);
                    Session::default()
                }
            },
            Ok(None) => Session { token: Some(token), user: None },
            Err(err) => {
                warn!(error = %err, "failed to read persisted profile; keeping token only");
                Session { token: Some(token), user: None }
            }
        }
    }

    fn clear_storage(&self) {
        if let Err(err) = self.storage.remove(SESSION_TOKEN_KEY) {
            warn!(error = %err, "failed to remove persisted token");
        }
        if let Err(err) = self.storage.remove(SESSION_USER_KEY) {
            warn!(error = %err, "failed to remove persisted profile");
        }
    }
}
