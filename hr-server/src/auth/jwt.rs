//! JWT issue/verify for API authentication

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::user::UserRole;

/// Claims embedded in an access token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Account role
    pub role: UserRole,
    /// Expiration (Unix timestamp seconds)
    pub exp: i64,
    /// Issued at (Unix timestamp seconds)
    pub iat: i64,
}

/// Create a signed access token for a user
pub fn create_token(
    user_id: &str,
    role: UserRole,
    secret: &str,
    ttl_ms: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        role,
        exp: now + ttl_ms / 1000,
        iat: now,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify signature and expiry, returning the claims.
///
/// Verification is stateless; whether the subject account still exists
/// and is active is the caller's problem.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let token_data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::new(ErrorCode::TokenExpired),
        _ => {
            tracing::debug!("JWT validation failed: {e}");
            AppError::new(ErrorCode::TokenInvalid)
        }
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-at-least-32-chars!!";
    const TTL_8H: i64 = 8 * 60 * 60 * 1000;

    #[test]
    fn test_issue_then_decode() {
        let token = create_token("user-123", UserRole::Manager, SECRET, TTL_8H).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.role, UserRole::Manager);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative TTL well past the default decode leeway
        let token = create_token("user-123", UserRole::Employee, SECRET, -2 * 60 * 60 * 1000)
            .unwrap();
        let err = decode_token(&token, SECRET).unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenExpired);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token("user-123", UserRole::Employee, SECRET, TTL_8H).unwrap();
        let err = decode_token(&token, "another-secret-key-32-chars-long!!").unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenInvalid);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = create_token("user-123", UserRole::Employee, SECRET, TTL_8H).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert!(decode_token(&tampered, SECRET).is_err());
    }
}
