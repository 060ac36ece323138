//! Login attempt tracking and account lockout
//!
//! Failed attempt counts and the lockout timestamp live on the user row.
//! Lock expiry is passive: a past `account_locked_until` simply stops
//! matching, the counter keeps its value until the next successful login.

use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use ch_shared::config::LockoutConfig;
use ch_shared::utils::email::mask_email;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;
use crate::repositories::UserRepository;

/// Guard tracking failed logins and locking accounts
pub struct LoginAttemptGuard<U: UserRepository> {
    users: Arc<U>,
    config: LockoutConfig,
}

impl<U: UserRepository> LoginAttemptGuard<U> {
    /// Creates a new guard with the given lockout policy
    pub fn new(users: Arc<U>, config: LockoutConfig) -> Self {
        Self { users, config }
    }

    /// Checks whether the user is inside an active lockout window
    pub fn is_locked(&self, user: &User) -> bool {
        user.is_locked()
    }

    /// Records a failed login attempt, locking the account at the threshold
    ///
    /// The increment is a read-modify-write on the user row; two concurrent
    /// failures can each persist the same count. TODO: move the counter to an
    /// atomic store increment once the KV store grows an INCR operation.
    pub async fn record_failure(&self, mut user: User) -> DomainResult<User> {
        user.failed_login_attempts += 1;
        user.updated_at = Utc::now();

        if user.failed_login_attempts >= self.config.max_failed_attempts {
            user.account_locked_until =
                Some(Utc::now() + Duration::minutes(self.config.lockout_duration_minutes));
            warn!(
                email = %mask_email(&user.email),
                attempts = user.failed_login_attempts,
                lockout_minutes = self.config.lockout_duration_minutes,
                "Account locked after repeated failed logins"
            );
        } else {
            warn!(
                email = %mask_email(&user.email),
                attempts = user.failed_login_attempts,
                max_attempts = self.config.max_failed_attempts,
                "Failed login attempt recorded"
            );
        }

        self.users.update(user).await
    }

    /// Records a successful login: resets the counter, clears the lock and
    /// stamps the login time in one update
    pub async fn record_success(&self, mut user: User) -> DomainResult<User> {
        user.failed_login_attempts = 0;
        user.account_locked_until = None;
        user.update_last_login();

        info!(email = %mask_email(&user.email), "Successful login recorded");

        self.users.update(user).await
    }
}
