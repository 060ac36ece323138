//! Authentication service module
//!
//! This module provides the account authentication flows:
//! - Password verification with lockout protection
//! - Login, refresh and logout orchestration
//! - Password reset and email verification
//! - MFA code dispatch and verification

mod config;
mod credentials;
mod lockout;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use credentials::CredentialVerifier;
pub use lockout::LoginAttemptGuard;
pub use service::{AuthService, LoginOutcome};
