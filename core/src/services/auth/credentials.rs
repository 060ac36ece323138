//! Password credential verification pipeline

use std::sync::Arc;
use tracing::warn;

use ch_shared::utils::email::{mask_email, normalize_email};

use crate::domain::entities::user::{User, UserStatus};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;

use super::lockout::LoginAttemptGuard;

/// Verifies email/password credentials against the user store
///
/// Unknown and soft-deleted accounts both answer `InvalidCredentials`, the
/// same as a wrong password, so the login endpoint never confirms whether an
/// email is registered.
pub struct CredentialVerifier<U: UserRepository> {
    users: Arc<U>,
    guard: LoginAttemptGuard<U>,
}

impl<U: UserRepository> CredentialVerifier<U> {
    /// Creates a new verifier sharing the guard's lockout policy
    pub fn new(users: Arc<U>, guard: LoginAttemptGuard<U>) -> Self {
        Self { users, guard }
    }

    /// Verifies credentials and returns the authenticated user record
    ///
    /// The lockout check runs before the bcrypt comparison; a locked account
    /// is rejected without touching the stored hash.
    pub async fn verify(&self, email: &str, password: &str) -> DomainResult<User> {
        let normalized = normalize_email(email);

        let user = match self.users.find_by_email(&normalized).await? {
            Some(user) if user.status != UserStatus::Deleted => user,
            _ => {
                warn!(email = %mask_email(&normalized), "Login attempt for unknown account");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !matches!(user.status, UserStatus::Active) {
            return Err(AuthError::AccountInactive.into());
        }

        if self.guard.is_locked(&user) {
            warn!(email = %mask_email(&normalized), "Login attempt on locked account");
            return Err(AuthError::AccountLocked.into());
        }

        let matches = bcrypt::verify(password, &user.password_hash).map_err(|e| {
            DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            }
        })?;

        if !matches {
            // The lock set by the threshold failure surfaces on the next
            // attempt; the mismatch itself always answers InvalidCredentials.
            self.guard.record_failure(user).await?;
            return Err(AuthError::InvalidCredentials.into());
        }

        self.guard.record_success(user).await
    }
}
