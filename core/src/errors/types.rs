//! Domain-specific error types for authentication and token operations
//!
//! Error messages are deliberately generic where account enumeration is a
//! concern; the presentation layer maps the enum variants to transport
//! status codes (401 for credential/token failures, 423 for lockout,
//! 429 for rate limiting).

use ch_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is not active")]
    AccountInactive,

    #[error("Account is temporarily locked")]
    AccountLocked,

    #[error("User not found")]
    UserNotFound,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Rate limit exceeded, retry in {retry_after_seconds} seconds")]
    RateLimitExceeded { retry_after_seconds: u64 },
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is malformed or has an invalid signature")]
    TokenMalformed,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token has the wrong type for this operation")]
    TokenWrongType,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("One-time token not found or expired")]
    OneTimeTokenNotFoundOrExpired,

    #[error("One-time token was issued for a different purpose")]
    OneTimeTokenWrongPurpose,
}

impl IntoErrorResponse for AuthError {
    fn to_error_response(&self) -> ErrorResponse {
        let code = match self {
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::AccountInactive => error_codes::ACCOUNT_INACTIVE,
            AuthError::AccountLocked => error_codes::ACCOUNT_LOCKED,
            AuthError::UserNotFound => error_codes::NOT_FOUND,
            AuthError::InsufficientPermissions => error_codes::FORBIDDEN,
            AuthError::RateLimitExceeded { .. } => error_codes::RATE_LIMIT_EXCEEDED,
        };

        let response = ErrorResponse::new(code, self.to_string());
        match self {
            AuthError::RateLimitExceeded {
                retry_after_seconds,
            } => response.add_detail("retry_after_seconds", retry_after_seconds),
            _ => response,
        }
    }
}

impl IntoErrorResponse for TokenError {
    fn to_error_response(&self) -> ErrorResponse {
        let code = match self {
            TokenError::TokenMalformed => error_codes::TOKEN_MALFORMED,
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            TokenError::TokenWrongType => error_codes::TOKEN_WRONG_TYPE,
            TokenError::TokenRevoked => error_codes::TOKEN_REVOKED,
            TokenError::TokenGenerationFailed => error_codes::INTERNAL_ERROR,
            TokenError::OneTimeTokenNotFoundOrExpired => {
                error_codes::ONE_TIME_TOKEN_NOT_FOUND_OR_EXPIRED
            }
            TokenError::OneTimeTokenWrongPurpose => error_codes::ONE_TIME_TOKEN_WRONG_PURPOSE,
        };

        ErrorResponse::new(code, self.to_string())
    }
}
