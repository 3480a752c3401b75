//! Auth request/response types for the CMS auth endpoints

use serde::{Deserialize, Serialize};

use crate::types::user::UserProfile;

/// Login form payload for `POST /auth/local`
///
/// The email is normalized (trimmed, lowercased) at construction so the
/// identifier sent to the CMS is canonical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.trim().to_lowercase(), password: password.to_string() }
    }
}

/// Successful login response: a JWT plus the user snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub jwt: String,
    pub user: UserProfile,
}

/// Registration form payload for `POST /custom-auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub firstname: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

impl RegistrationRequest {
    #[must_use]
    pub fn new(firstname: &str, surname: &str, email: &str, password: &str) -> Self {
        Self {
            firstname: firstname.trim().to_string(),
            surname: surname.trim().to_string(),
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        }
    }
}
