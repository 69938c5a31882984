use serde::Deserialize;

use crate::config::Config;
use crate::models::{
    consumption::ConsumptionSubmission,
    dashboard::{Dashboard, DashboardRecord},
    error::AppError,
    leaderboard::{Leaderboard, LeaderboardEntry},
};
use crate::services::http::{classify_error, error_for_status};

/// Account details from the calculation service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub email: String,
    pub city: String,
    pub name: String,
}

/// HTTP client for the carbon calculation service. All endpoints
/// require bearer auth, so the client is built from a session token.
pub struct CarbonClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl CarbonClient {
    pub fn new(token: impl Into<String>) -> Result<Self, AppError> {
        Self::with_base_url(Config::CARBON_BASE_URL, token)
    }

    /// Creates a client against a custom base URL (primarily for testing).
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    fn profile_url(&self, user_id: i64) -> String {
        format!("{}/carbonTrack/profile/{user_id}", self.base_url)
    }

    fn dashboard_url(&self, user_id: i64) -> String {
        format!("{}/carbonTrack/user/{user_id}/dashboard", self.base_url)
    }

    fn leaderboard_url(&self, city: &str) -> String {
        format!("{}/carbonTrack/leaderBoard/{city}", self.base_url)
    }

    fn submit_url(&self) -> String {
        format!("{}/carbonTrack/calculateAndSubmit", self.base_url)
    }

    pub async fn fetch_profile(&self, user_id: i64) -> Result<Profile, AppError> {
        self.get_json(&self.profile_url(user_id)).await
    }

    /// Fetches the user's submission history, newest first.
    pub async fn fetch_dashboard(&self, user_id: i64) -> Result<Dashboard, AppError> {
        let records: Vec<DashboardRecord> = self.get_json(&self.dashboard_url(user_id)).await?;
        Ok(Dashboard::new(records))
    }

    /// Fetches the ranking for a city, in the server's order.
    pub async fn fetch_leaderboard(&self, city: &str) -> Result<Leaderboard, AppError> {
        let entries: Vec<LeaderboardEntry> = self.get_json(&self.leaderboard_url(city)).await?;
        Ok(Leaderboard::new(entries))
    }

    /// Submits a day's consumption; the service replies with the
    /// computed total in kgCO2e.
    pub async fn submit(&self, submission: &ConsumptionSubmission) -> Result<f64, AppError> {
        let response = self
            .http
            .post(self.submit_url())
            .bearer_auth(&self.token)
            .json(submission)
            .send()
            .await
            .map_err(|e| classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Executes a single authenticated GET and decodes the body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }
}
