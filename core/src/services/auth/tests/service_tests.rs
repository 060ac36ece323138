//! Tests for the authentication flow orchestration

use uuid::Uuid;

use crate::domain::entities::user::UserStatus;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::UserRepository;

use super::mocks::{active_user, auth_service_with, MockEmailService, TEST_BCRYPT_COST};

#[tokio::test]
async fn test_login_issues_tokens() {
    let user = active_user("alice@example.com", "s3cret-pw");
    let (service, _, _) = auth_service_with(vec![user.clone()], MockEmailService::new()).await;

    let outcome = service.login("alice@example.com", "s3cret-pw").await.unwrap();
    assert_eq!(outcome.user.id, user.id);
    assert!(!outcome.token_pair.access_token.is_empty());
    assert!(!outcome.token_pair.refresh_token.is_empty());

    // The refresh token from login is immediately usable
    let refreshed = service.refresh(&outcome.token_pair.refresh_token).await.unwrap();
    assert_eq!(refreshed.refresh_token, outcome.token_pair.refresh_token);
}

#[tokio::test]
async fn test_login_failure_does_not_issue_tokens() {
    let user = active_user("alice@example.com", "s3cret-pw");
    let (service, _, _) = auth_service_with(vec![user], MockEmailService::new()).await;

    let result = service.login("alice@example.com", "wrong").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_logout_invalidates_refresh() {
    let user = active_user("bob@example.com", "s3cret-pw");
    let (service, _, _) = auth_service_with(vec![user.clone()], MockEmailService::new()).await;

    let outcome = service.login("bob@example.com", "s3cret-pw").await.unwrap();
    service.logout(user.id).await.unwrap();

    let result = service.refresh(&outcome.token_pair.refresh_token).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenRevoked))
    ));
}

#[tokio::test]
async fn test_forgot_and_reset_password_flow() {
    let user = active_user("carol@example.com", "old-password");
    let (service, repo, email) =
        auth_service_with(vec![user.clone()], MockEmailService::new()).await;

    service.forgot_password("carol@example.com").await.unwrap();
    let token = email.last_secret().expect("reset email sent");

    service.reset_password(&token, "new-password").await.unwrap();

    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert!(bcrypt::verify("new-password", &stored.password_hash).unwrap());
    assert!(!bcrypt::verify("old-password", &stored.password_hash).unwrap());

    // The token was single-use
    let reuse = service.reset_password(&token, "another-password").await;
    assert!(matches!(
        reuse,
        Err(DomainError::Token(TokenError::OneTimeTokenNotFoundOrExpired))
    ));
}

#[tokio::test]
async fn test_forgot_password_unknown_email() {
    let (service, _, _) = auth_service_with(vec![], MockEmailService::new()).await;

    let result = service.forgot_password("nobody@example.com").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}

#[tokio::test]
async fn test_forgot_password_rejects_malformed_email() {
    let (service, _, email) = auth_service_with(vec![], MockEmailService::new()).await;

    let result = service.forgot_password("not-an-email").await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
    assert!(email.last_secret().is_none());
}

#[tokio::test]
async fn test_forgot_password_email_failure_surfaces() {
    let user = active_user("dave@example.com", "s3cret-pw");
    let (service, _, _) = auth_service_with(vec![user], MockEmailService::failing()).await;

    let result = service.forgot_password("dave@example.com").await;
    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[tokio::test]
async fn test_verification_token_cannot_reset_password() {
    let mut user = active_user("erin@example.com", "s3cret-pw");
    user.status = UserStatus::PendingVerification;
    let (service, _, email) =
        auth_service_with(vec![user], MockEmailService::new()).await;

    service.resend_verification("erin@example.com").await.unwrap();
    let token = email.last_secret().unwrap();

    let result = service.reset_password(&token, "new-password").await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::OneTimeTokenWrongPurpose))
    ));

    // Still usable for verification afterwards
    service.verify_email(&token).await.unwrap();
}

#[tokio::test]
async fn test_verify_email_activates_account() {
    let mut user = active_user("frank@example.com", "s3cret-pw");
    user.status = UserStatus::PendingVerification;
    let (service, repo, email) =
        auth_service_with(vec![user.clone()], MockEmailService::new()).await;

    service.resend_verification("frank@example.com").await.unwrap();
    let token = email.last_secret().unwrap();

    service.verify_email(&token).await.unwrap();

    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.status, UserStatus::Active);
}

#[tokio::test]
async fn test_resend_verification_rejects_active_account() {
    let user = active_user("grace@example.com", "s3cret-pw");
    let (service, _, _) = auth_service_with(vec![user], MockEmailService::new()).await;

    let result = service.resend_verification("grace@example.com").await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_change_password() {
    let user = active_user("heidi@example.com", "current-pw");
    let (service, repo, _) =
        auth_service_with(vec![user.clone()], MockEmailService::new()).await;

    // Wrong current password is rejected
    let result = service
        .change_password(user.id, "not-current", "next-pw")
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));

    service
        .change_password(user.id, "current-pw", "next-pw")
        .await
        .unwrap();

    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert!(bcrypt::verify("next-pw", &stored.password_hash).unwrap());
}

#[tokio::test]
async fn test_change_password_unknown_user() {
    let (service, _, _) = auth_service_with(vec![], MockEmailService::new()).await;

    let result = service
        .change_password(Uuid::new_v4(), "current", "next")
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}

#[tokio::test]
async fn test_mfa_round_trip() {
    let user = active_user("ivan@example.com", "s3cret-pw");
    let (service, _, email) =
        auth_service_with(vec![user], MockEmailService::new()).await;

    service.send_mfa_code("ivan@example.com").await.unwrap();
    let code = email.last_secret().unwrap();

    // Wrong code leaves the real one pending
    let wrong = if code == "000000" { "111111" } else { "000000" };
    let result = service.verify_mfa_code("ivan@example.com", wrong).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));

    service.verify_mfa_code("ivan@example.com", &code).await.unwrap();

    // Consumed on the successful match
    let reuse = service.verify_mfa_code("ivan@example.com", &code).await;
    assert!(matches!(
        reuse,
        Err(DomainError::Token(TokenError::OneTimeTokenNotFoundOrExpired))
    ));
}

#[tokio::test]
async fn test_reset_password_hash_uses_configured_cost() {
    let user = active_user("judy@example.com", "old-pw");
    let (service, repo, email) =
        auth_service_with(vec![user.clone()], MockEmailService::new()).await;

    service.forgot_password("judy@example.com").await.unwrap();
    let token = email.last_secret().unwrap();
    service.reset_password(&token, "fresh-pw").await.unwrap();

    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    let cost_marker = format!("${:02}$", TEST_BCRYPT_COST);
    assert!(stored.password_hash.contains(&cost_marker));
}
