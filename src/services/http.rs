use serde::Deserialize;

use crate::models::error::AppError;

/// Error envelope the backing services return on non-success statuses.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Converts a reqwest error into an appropriate `AppError`.
pub fn classify_error(error: &reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::ApiError(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::ApiError(format!("Request error: {error}"))
    } else {
        AppError::ApiError(format!("Network error: {error}"))
    }
}

/// Creates an error based on HTTP status code, surfacing the
/// service-provided `message` when the body carries one.
pub fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    let message = service_message(body);
    match status.as_u16() {
        401 | 403 => AppError::AuthError(
            message.unwrap_or_else(|| format!("Authentication failed: {status}")),
        ),
        404 => AppError::NotFound(message.unwrap_or_else(|| format!("Resource not found: {body}"))),
        400..=499 => {
            AppError::ApiError(message.unwrap_or_else(|| format!("Client error {status}: {body}")))
        }
        500..=599 => {
            AppError::ApiError(message.unwrap_or_else(|| format!("Server error {status}: {body}")))
        }
        _ => AppError::ApiError(
            message.unwrap_or_else(|| format!("Unexpected status {status}: {body}")),
        ),
    }
}

/// Pulls the `message` field out of a JSON error body, if there is one.
fn service_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}
