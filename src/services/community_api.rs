use serde::Serialize;

use crate::config::Config;
use crate::models::{
    community::{CommunityPost, CreatePostRequest, CreatePostResponse},
    error::AppError,
};
use crate::services::http::{classify_error, error_for_status};

#[derive(Serialize)]
struct LocationUpdate<'a> {
    location: &'a str,
}

/// HTTP client for the community post service.
pub struct CommunityClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl CommunityClient {
    pub fn new(token: impl Into<String>) -> Result<Self, AppError> {
        Self::with_base_url(Config::COMMUNITY_BASE_URL, token)
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

    fn posts_url(&self) -> String {
        format!("{}/community/posts", self.base_url)
    }

    fn location_url(&self) -> String {
        format!("{}/api/auth/social/location", self.base_url)
    }

    /// Fetches the full feed: unscoped, no pagination.
    pub async fn fetch_posts(&self) -> Result<Vec<CommunityPost>, AppError> {
        let response = self
            .http
            .get(self.posts_url())
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

    /// Creates a post and returns the service's echoed copy, which the
    /// caller prepends to its feed.
    pub async fn create_post(&self, request: &CreatePostRequest) -> Result<CommunityPost, AppError> {
        let response = self
            .http
            .post(self.posts_url())
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await
            .map_err(|e| classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        let created: CreatePostResponse = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))?;

        Ok(created.post)
    }

    /// Updates the account's social location. Uses the session token
    /// like every other authenticated call.
    pub async fn update_location(&self, location: &str) -> Result<(), AppError> {
        let response = self
            .http
            .post(self.location_url())
            .bearer_auth(&self.token)
            .json(&LocationUpdate { location })
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_construction() {
        let client = CommunityClient::with_base_url("http://localhost:8082", "tok").unwrap();
        assert_eq!(client.posts_url(), "http://localhost:8082/community/posts");
        assert_eq!(
            client.location_url(),
            "http://localhost:8082/api/auth/social/location"
        );
    }

    #[test]
    fn test_feed_parsing() {
        let json = r#"[
            {"id":2,"userName":"B","content":"second"},
            {"id":1,"userName":"A","content":"first"}
        ]"#;
        let posts: Vec<CommunityPost> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].user_name, "B");
    }

    #[test]
    fn test_location_update_shape() {
        let json = serde_json::to_value(LocationUpdate { location: "Austin, Texas" }).unwrap();
        assert_eq!(json["location"], "Austin, Texas");
    }
}
