//! Email delivery trait used by the authentication flows
//!
//! Message formatting and transport live in the infrastructure layer; the
//! core only hands over the address and the secret to embed.

use async_trait::async_trait;

/// Email service trait for authentication-related messages
///
/// Errors are plain strings from the provider; callers decide how a delivery
/// failure surfaces. On success the provider message id is returned.
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a password reset email carrying the reset token
    async fn send_password_reset(&self, email: &str, token: &str) -> Result<String, String>;

    /// Send an email verification message carrying the verification token
    async fn send_verification_email(&self, email: &str, token: &str) -> Result<String, String>;

    /// Send a multi-factor authentication code
    async fn send_mfa_code(&self, email: &str, code: &str) -> Result<String, String>;
}
