//! Single-use token record for password reset, email verification and MFA.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Purpose a one-time token was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OneTimeTokenPurpose {
    PasswordReset,
    EmailVerification,
    MfaCode,
}

/// A single-use token record stored in the TTL store
///
/// The store's TTL is the primary expiry mechanism; `expires_at` is kept in
/// the record so a stale entry can still be rejected after it is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeToken {
    /// The opaque token value presented by the client
    pub token: String,

    /// What the token authorizes
    pub purpose: OneTimeTokenPurpose,

    /// The user this token was issued to
    pub subject: Uuid,

    /// Timestamp when the token was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp after which the token is invalid
    pub expires_at: DateTime<Utc>,
}

impl OneTimeToken {
    /// Creates a new token record with the given lifetime in seconds
    pub fn new(
        token: String,
        purpose: OneTimeTokenPurpose,
        subject: Uuid,
        ttl_seconds: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            token,
            purpose,
            subject,
            issued_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
        }
    }

    /// Checks whether the token has passed its expiry time
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}
