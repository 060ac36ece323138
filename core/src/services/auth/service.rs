//! Authentication flow orchestration

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use ch_shared::utils::email::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::one_time_token::OneTimeTokenPurpose;
use crate::domain::entities::user::{User, UserStatus};
use crate::domain::value_objects::TokenPair;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::email::EmailServiceTrait;
use crate::services::one_time::OneTimeTokenManager;
use crate::services::token::SessionTokenService;
use crate::stores::KeyValueStore;

use super::config::AuthServiceConfig;
use super::credentials::CredentialVerifier;

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Issued session tokens
    pub token_pair: TokenPair,
    /// The authenticated user
    pub user: User,
}

/// Orchestrates the authentication flows over the security services
pub struct AuthService<U, K, E>
where
    U: UserRepository,
    K: KeyValueStore,
    E: EmailServiceTrait,
{
    users: Arc<U>,
    verifier: CredentialVerifier<U>,
    tokens: SessionTokenService<U, K>,
    one_time: OneTimeTokenManager<K>,
    email: Arc<E>,
    config: AuthServiceConfig,
}

impl<U, K, E> AuthService<U, K, E>
where
    U: UserRepository,
    K: KeyValueStore,
    E: EmailServiceTrait,
{
    /// Creates a new authentication service
    pub fn new(
        users: Arc<U>,
        verifier: CredentialVerifier<U>,
        tokens: SessionTokenService<U, K>,
        one_time: OneTimeTokenManager<K>,
        email: Arc<E>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            users,
            verifier,
            tokens,
            one_time,
            email,
            config,
        }
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<User> {
        let normalized = normalize_email(email);
        if !is_valid_email(&normalized) {
            return Err(DomainError::Validation {
                message: "Invalid email format".to_string(),
            });
        }
        self.users
            .find_by_email(&normalized)
            .await?
            .filter(|u| u.status != UserStatus::Deleted)
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    fn hash_password(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.config.bcrypt_cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Authenticates credentials and issues a session token pair
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginOutcome> {
        let user = self.verifier.verify(email, password).await?;
        let token_pair = self.tokens.issue_token_pair(&user).await?;

        info!(email = %mask_email(&user.email), "User logged in");
        Ok(LoginOutcome { token_pair, user })
    }

    /// Exchanges a refresh token for a new access token
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        self.tokens.refresh(refresh_token).await
    }

    /// Ends the user's session
    pub async fn logout(&self, user_id: Uuid) -> DomainResult<()> {
        self.tokens.logout(user_id).await
    }

    /// Issues a password reset token and dispatches the reset email
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        let user = self.find_by_email(email).await?;

        let token = self
            .one_time
            .issue(user.id, OneTimeTokenPurpose::PasswordReset)
            .await?;

        self.email
            .send_password_reset(&user.email, &token)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to send password reset email: {}", e),
            })?;

        info!(email = %mask_email(&user.email), "Password reset email sent");
        Ok(())
    }

    /// Consumes a reset token and replaces the user's password
    pub async fn reset_password(&self, token: &str, new_password: &str) -> DomainResult<()> {
        let subject = self
            .one_time
            .consume(token, OneTimeTokenPurpose::PasswordReset)
            .await?;

        let mut user = self.find_by_id(subject).await?;
        user.password_hash = self.hash_password(new_password)?;
        user.updated_at = chrono::Utc::now();
        self.users.update(user.clone()).await?;

        info!(email = %mask_email(&user.email), "Password reset completed");
        Ok(())
    }

    /// Consumes a verification token and activates the account
    ///
    /// Already-active accounts short-circuit successfully, so a double click
    /// on the verification link is harmless.
    pub async fn verify_email(&self, token: &str) -> DomainResult<()> {
        let subject = self
            .one_time
            .consume(token, OneTimeTokenPurpose::EmailVerification)
            .await?;

        let mut user = self.find_by_id(subject).await?;
        if user.is_active() {
            return Ok(());
        }

        user.activate();
        self.users.update(user.clone()).await?;

        info!(email = %mask_email(&user.email), "Email verified, account activated");
        Ok(())
    }

    /// Issues a fresh verification token for a pending account
    pub async fn resend_verification(&self, email: &str) -> DomainResult<()> {
        let user = self.find_by_email(email).await?;

        if user.status != UserStatus::PendingVerification {
            return Err(DomainError::Validation {
                message: "Account is not pending verification".to_string(),
            });
        }

        let token = self
            .one_time
            .issue(user.id, OneTimeTokenPurpose::EmailVerification)
            .await?;

        self.email
            .send_verification_email(&user.email, &token)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to send verification email: {}", e),
            })?;

        Ok(())
    }

    /// Replaces the password after re-verifying the current one
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let mut user = self.find_by_id(user_id).await?;

        let matches =
            bcrypt::verify(current_password, &user.password_hash).map_err(|e| {
                DomainError::Internal {
                    message: format!("Password verification failed: {}", e),
                }
            })?;
        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        user.password_hash = self.hash_password(new_password)?;
        user.updated_at = chrono::Utc::now();
        self.users.update(user.clone()).await?;

        info!(email = %mask_email(&user.email), "Password changed");
        Ok(())
    }

    /// Issues an MFA code for the user and dispatches it by email
    pub async fn send_mfa_code(&self, email: &str) -> DomainResult<()> {
        let user = self.find_by_email(email).await?;

        let code = self
            .one_time
            .issue(user.id, OneTimeTokenPurpose::MfaCode)
            .await?;

        self.email
            .send_mfa_code(&user.email, &code)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to send MFA code: {}", e),
            })?;

        info!(email = %mask_email(&user.email), "MFA code sent");
        Ok(())
    }

    /// Verifies a pending MFA code for the user
    pub async fn verify_mfa_code(&self, email: &str, code: &str) -> DomainResult<()> {
        let user = self.find_by_email(email).await?;
        self.one_time.verify_mfa(user.id, code).await
    }
}
