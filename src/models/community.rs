use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Fixed title the post service expects on every community post.
pub const POST_TITLE: &str = "Environment";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CommunityPost {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// The post service echoes the stored post back under a `post` key.
#[derive(Debug, Deserialize)]
pub struct CreatePostResponse {
    pub post: CommunityPost,
}

impl CreatePostRequest {
    /// Builds a request from compose-box content, rejecting
    /// empty/whitespace-only input before any network call.
    pub fn new(content: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::Validation(
                "Post content cannot be empty.".to_string(),
            ));
        }
        Ok(Self {
            title: POST_TITLE.to_string(),
            content: content.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_content_rejected() {
        assert!(CreatePostRequest::new("   \n").is_err());
        assert!(CreatePostRequest::new("").is_err());
    }

    #[test]
    fn test_request_carries_fixed_title() {
        let request = CreatePostRequest::new("hello").unwrap();
        assert_eq!(request.title, POST_TITLE);
        assert_eq!(request.content, "hello");
    }

    #[test]
    fn test_create_response_unwraps_post() {
        let json = r#"{"post":{"id":3,"userName":"A","title":"Environment","content":"hi"}}"#;
        let response: CreatePostResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.post.user_name, "A");
        assert_eq!(response.post.content, "hi");
    }

    #[test]
    fn test_post_without_id_or_title() {
        let json = r#"{"userName":"A","content":"hi"}"#;
        let post: CommunityPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, None);
        assert_eq!(post.title, None);
    }
}
