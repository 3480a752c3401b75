//! CMS auth endpoints: login and registration

use reqwest::{Response, StatusCode};
use tracing::info;
use vagtportal_core::{validate_login, validate_registration};
use vagtportal_domain::{
    CmsConfig, LoginCredentials, LoginResponse, PortalError, RegistrationRequest, Result,
};

use super::types::ErrorBody;
use crate::errors::InfraError;
use crate::http::HttpClient;

const INVALID_CREDENTIALS_MESSAGE: &str = "Forkert email eller adgangskode";

/// Client for the CMS auth endpoints.
pub struct AuthClient {
    http: HttpClient,
    base_url: String,
}

impl AuthClient {
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    /// Authenticate against `POST /auth/local`.
    ///
    /// Field validation runs before any request is issued; a validation
    /// failure never reaches the network. Invalid credentials surface as a
    /// typed `Auth` error carrying the server's message when it provides
    /// one.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse> {
        validate_login(credentials)?;

        let url = format!("{}/auth/local", self.base_url);
        let payload = serde_json::json!({
            "identifier": credentials.email,
            "password": credentials.password,
        });

        let response = self.http.send(self.http.post(&url).json(&payload)).await?;
        let status = response.status();

        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            let message = read_error_message(response)
                .await
                .unwrap_or_else(|| INVALID_CREDENTIALS_MESSAGE.to_string());
            return Err(PortalError::Auth(message));
        }

        if !status.is_success() {
            return Err(PortalError::Network(format!("login request failed ({status})")));
        }

        let body: LoginResponse = response.json().await.map_err(InfraError::from)?;
        info!(user_id = body.user.id, "login succeeded");
        Ok(body)
    }

    /// Submit a registration to `POST /custom-auth/register`.
    ///
    /// New accounts start unapproved: a successful registration leads to
    /// the pending-approval flow on first login, not straight to shift
    /// data.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<()> {
        validate_registration(request)?;

        let url = format!("{}/custom-auth/register", self.base_url);
        let response = self.http.send(self.http.post(&url).json(request)).await?;
        let status = response.status();

        if status.is_success() {
            info!("registration submitted");
            return Ok(());
        }

        let message = read_error_message(response)
            .await
            .unwrap_or_else(|| format!("registration failed ({status})"));
        Err(PortalError::Auth(message))
    }
}

async fn read_error_message(response: Response) -> Option<String> {
    response.json::<ErrorBody>().await.ok().map(|body| body.error.message)
}
