use base64::Engine as _;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Authenticated identity used to scope protected requests.
///
/// Both parts must be present before any protected view issues a
/// request; absence routes the user back to the login form. No expiry
/// check happens client-side; a stale token only surfaces as a
/// rejected downstream request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub token: String,
}

impl Session {
    /// Builds a session from a login token by reading its `userId` claim.
    ///
    /// A token that decodes but carries no `userId` is a partial
    /// failure: the HTTP call succeeded, yet no session can be
    /// established from it.
    pub fn from_token(token: impl Into<String>) -> Result<Self, AppError> {
        let token = token.into();
        let user_id = decode_user_claim(&token)?;
        Ok(Self { user_id, token })
    }
}

/// Claims we care about from the identity service's JWT payload.
#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(rename = "userId")]
    user_id: Option<i64>,
}

/// Extracts the `userId` claim from a JWT without verifying the
/// signature. Verification belongs to the services that consume the
/// token; the client only needs the identity claim.
pub fn decode_user_claim(token: &str) -> Result<i64, AppError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| AppError::AuthError("Token is not a JWT".to_string()))?;

    // JWT payloads are unpadded base64url, but some issuers pad anyway
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| URL_SAFE.decode(payload))
        .map_err(|e| AppError::AuthError(format!("Failed to decode token payload: {e}")))?;

    let claims: Claims = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::AuthError(format!("Failed to parse token payload: {e}")))?;

    claims
        .user_id
        .ok_or_else(|| AppError::AuthError("Token is missing the userId claim".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    #[test]
    fn test_decode_valid_claim() {
        let token = token_with_payload(r#"{"userId":42,"sub":"a@b.c"}"#);
        assert_eq!(decode_user_claim(&token).unwrap(), 42);
    }

    #[test]
    fn test_missing_claim_is_auth_error() {
        let token = token_with_payload(r#"{"sub":"a@b.c"}"#);
        let err = decode_user_claim(&token).unwrap_err();
        assert!(matches!(err, AppError::AuthError(_)));
        assert!(err.to_string().contains("userId"));
    }

    #[test]
    fn test_not_a_jwt() {
        assert!(decode_user_claim("garbage").is_err());
    }

    #[test]
    fn test_payload_not_json() {
        let header = URL_SAFE_NO_PAD.encode("{}");
        let body = URL_SAFE_NO_PAD.encode("not json");
        let token = format!("{header}.{body}.sig");
        assert!(decode_user_claim(&token).is_err());
    }

    #[test]
    fn test_session_from_token() {
        let token = token_with_payload(r#"{"userId":7}"#);
        let session = Session::from_token(token.clone()).unwrap();
        assert_eq!(session.user_id, 7);
        assert_eq!(session.token, token);
    }
}
