//! User entity representing a registered account in the CourseHub system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// A learner enrolled in courses
    Student,
    /// A teacher publishing and running courses
    Instructor,
    /// A platform administrator
    Admin,
}

impl UserRole {
    /// Stable string form used in token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::Instructor => "INSTRUCTOR",
            UserRole::Admin => "ADMIN",
        }
    }
}

/// Lifecycle status of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// Account may log in
    Active,
    /// Account deactivated by the user or an administrator
    Inactive,
    /// Account suspended for policy reasons
    Suspended,
    /// Registered but email not yet verified
    PendingVerification,
    /// Soft-deleted account
    Deleted,
}

/// User entity carrying the credential and lockout state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, always stored lowercase
    pub email: String,

    /// Bcrypt hash of the password
    pub password_hash: String,

    /// Role assigned to the account
    pub role: UserRole,

    /// Lifecycle status of the account
    pub status: UserStatus,

    /// Consecutive failed login attempts since the last success
    pub failed_login_attempts: u32,

    /// End of the current lockout window, if any
    pub account_locked_until: Option<DateTime<Utc>>,

    /// Timestamp of the user's last successful login
    pub last_login_at: Option<DateTime<Utc>>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance in pending-verification state
    pub fn new(email: String, password_hash: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.to_lowercase(),
            password_hash,
            role,
            status: UserStatus::PendingVerification,
            failed_login_attempts: 0,
            account_locked_until: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the account is inside an active lockout window
    pub fn is_locked(&self) -> bool {
        match self.account_locked_until {
            Some(until) => until > Utc::now(),
            None => false,
        }
    }

    /// Checks whether the account may authenticate
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Marks the account as active (after email verification)
    pub fn activate(&mut self) {
        self.status = UserStatus::Active;
        self.updated_at = Utc::now();
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }
}
