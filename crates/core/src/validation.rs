//! Form validation for the auth flows
//!
//! Failures are returned as typed values and rendered inline by the shell;
//! nothing here panics or reaches the network. Messages are the Danish
//! strings the portal shows its volunteers.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use vagtportal_domain::{LoginCredentials, PortalError, RegistrationRequest};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hardcoded email pattern"));

/// A single failed form field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for PortalError {
    fn from(err: ValidationError) -> Self {
        PortalError::Validation(err.message.to_string())
    }
}

/// Validate login form fields. Returns the first failing field.
pub fn validate_login(credentials: &LoginCredentials) -> Result<(), ValidationError> {
    validate_email(&credentials.email)?;
    if credentials.password.is_empty() {
        return Err(ValidationError::new("password", "Adgangskode er påkrævet"));
    }
    Ok(())
}

/// Validate registration form fields. Returns the first failing field.
pub fn validate_registration(request: &RegistrationRequest) -> Result<(), ValidationError> {
    if request.firstname.trim().is_empty() {
        return Err(ValidationError::new("firstname", "Fornavn er påkrævet"));
    }
    if request.surname.trim().is_empty() {
        return Err(ValidationError::new("surname", "Efternavn er påkrævet"));
    }
    validate_email(&request.email)?;
    if request.password.is_empty() {
        return Err(ValidationError::new("password", "Adgangskode er påkrævet"));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::new("email", "Email er påkrævet"));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::new("email", "Indtast en gyldig email adresse"));
    }
    Ok(())
}
