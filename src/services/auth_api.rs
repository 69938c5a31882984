use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::{error::AppError, session::Session};
use crate::services::http::{classify_error, error_for_status};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub city: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: Option<String>,
}

/// Local pre-network check for the registration form.
pub fn check_passwords(password: &str, confirm: &str) -> Result<(), AppError> {
    if password != confirm {
        return Err(AppError::Validation("Passwords do not match.".to_string()));
    }
    Ok(())
}

/// HTTP client for the identity service.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new() -> Result<Self, AppError> {
        Self::with_base_url(Config::IDENTITY_BASE_URL)
    }

    /// Creates a client against a custom base URL (primarily for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/auth/{action}", self.base_url)
    }

    /// Registers a new account. The service acknowledges with a 2xx;
    /// no session is established until the user logs in.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), AppError> {
        let response = self
            .http
            .post(self.endpoint("signup"))
            .json(request)
            .send()
            .await
            .map_err(|e| classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        Ok(())
    }

    /// Exchanges credentials for a session.
    ///
    /// A 2xx response without a token, or with a token missing the
    /// identity claim, is a soft failure: no session is returned even
    /// though the HTTP call succeeded.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, AppError> {
        let response = self
            .http
            .post(self.endpoint("login"))
            .json(request)
            .send()
            .await
            .map_err(|e| classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))?;

        let token = login.token.ok_or_else(|| {
            AppError::AuthError("Login succeeded but no token was returned.".to_string())
        })?;

        Session::from_token(token).map_err(|_| {
            AppError::AuthError(
                "Login successful, but there was an issue with the token. Please contact support."
                    .to_string(),
            )
        })
    }
}
