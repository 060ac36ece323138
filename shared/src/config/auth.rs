//! Authentication and token configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens (HMAC shared secret)
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-change-in-production"),
            access_token_expiry: 900,     // 15 minutes
            refresh_token_expiry: 604800, // 7 days
            issuer: String::from("coursehub"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }
}

/// Account lockout configuration for failed login attempts
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LockoutConfig {
    /// Number of failed attempts before the account is locked
    #[serde(default = "default_max_failed_attempts")]
    pub max_failed_attempts: u32,

    /// Duration of the lock in minutes
    #[serde(default = "default_lockout_duration_minutes")]
    pub lockout_duration_minutes: i64,
}

impl Default for LockoutConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: default_max_failed_attempts(),
            lockout_duration_minutes: default_lockout_duration_minutes(),
        }
    }
}

/// Lifetimes for single-use tokens, per purpose
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OneTimeTokenConfig {
    /// Password reset token lifetime in seconds
    pub password_reset_ttl: i64,

    /// Email verification token lifetime in seconds
    pub email_verification_ttl: i64,

    /// MFA code lifetime in seconds
    pub mfa_code_ttl: i64,
}

impl Default for OneTimeTokenConfig {
    fn default() -> Self {
        Self {
            password_reset_ttl: 3600,       // 1 hour
            email_verification_ttl: 86400,  // 24 hours
            mfa_code_ttl: 300,              // 5 minutes
        }
    }
}

/// Combined authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Account lockout configuration
    #[serde(default)]
    pub lockout: LockoutConfig,

    /// One-time token lifetimes
    #[serde(default)]
    pub one_time_tokens: OneTimeTokenConfig,
}

fn default_max_failed_attempts() -> u32 {
    5
}

fn default_lockout_duration_minutes() -> i64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_jwt_config() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 900);
        assert_eq!(config.refresh_token_expiry, 604800);
        assert_eq!(config.issuer, "coursehub");
    }

    #[test]
    fn test_jwt_config_builders() {
        let config = JwtConfig::new("s3cret")
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14);
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.access_token_expiry, 1800);
        assert_eq!(config.refresh_token_expiry, 14 * 86400);
    }

    #[test]
    fn test_default_lockout_config() {
        let config = LockoutConfig::default();
        assert_eq!(config.max_failed_attempts, 5);
        assert_eq!(config.lockout_duration_minutes, 30);
    }

    #[test]
    fn test_default_one_time_token_config() {
        let config = OneTimeTokenConfig::default();
        assert_eq!(config.password_reset_ttl, 3600);
        assert_eq!(config.email_verification_ttl, 86400);
        assert_eq!(config.mfa_code_ttl, 300);
    }
}
