//! Tests for failed-attempt tracking and account lockout

use chrono::{Duration, Utc};
use std::sync::Arc;

use ch_shared::config::LockoutConfig;

use crate::domain::entities::user::{User, UserRole};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::LoginAttemptGuard;

fn user() -> User {
    let mut user = User::new(
        "locked@example.com".to_string(),
        "hash".to_string(),
        UserRole::Student,
    );
    user.activate();
    user
}

async fn guard_with(user: &User) -> (LoginAttemptGuard<MockUserRepository>, Arc<MockUserRepository>) {
    let repo = Arc::new(MockUserRepository::with_user(user.clone()).await);
    let guard = LoginAttemptGuard::new(repo.clone(), LockoutConfig::default());
    (guard, repo)
}

#[tokio::test]
async fn test_lock_engages_at_fifth_failure() {
    let user = user();
    let (guard, repo) = guard_with(&user).await;

    let mut current = user;
    for expected in 1..=4u32 {
        current = guard.record_failure(current).await.unwrap();
        assert_eq!(current.failed_login_attempts, expected);
        assert!(!current.is_locked());
    }

    current = guard.record_failure(current).await.unwrap();
    assert_eq!(current.failed_login_attempts, 5);
    assert!(current.is_locked());

    // Lock window is about 30 minutes out
    let until = current.account_locked_until.unwrap();
    let delta = until - Utc::now();
    assert!(delta > Duration::minutes(29) && delta <= Duration::minutes(30));

    // The lock was persisted
    let stored = repo.find_by_id(current.id).await.unwrap().unwrap();
    assert!(stored.is_locked());
}

#[tokio::test]
async fn test_success_resets_counter_and_lock() {
    let mut user = user();
    user.failed_login_attempts = 5;
    user.account_locked_until = Some(Utc::now() + Duration::minutes(30));
    let (guard, repo) = guard_with(&user).await;

    let updated = guard.record_success(user).await.unwrap();

    assert_eq!(updated.failed_login_attempts, 0);
    assert!(updated.account_locked_until.is_none());
    assert!(updated.last_login_at.is_some());

    let stored = repo.find_by_id(updated.id).await.unwrap().unwrap();
    assert_eq!(stored.failed_login_attempts, 0);
}

#[tokio::test]
async fn test_passive_expiry_keeps_counter() {
    let mut user = user();
    user.failed_login_attempts = 5;
    user.account_locked_until = Some(Utc::now() - Duration::minutes(1));
    let (guard, _) = guard_with(&user).await;

    // The lock has lapsed but the counter is untouched
    assert!(!guard.is_locked(&user));
    assert_eq!(user.failed_login_attempts, 5);

    // One more failure locks again immediately
    let updated = guard.record_failure(user).await.unwrap();
    assert_eq!(updated.failed_login_attempts, 6);
    assert!(updated.is_locked());
}
