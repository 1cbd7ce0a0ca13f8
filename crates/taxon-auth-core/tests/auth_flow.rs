//! Integration tests for the signup/login/resolve flow over in-memory
//! repositories.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::mock_repos::{FailingUserRepository, MockUserRepository};
use taxon_auth_core::{AuthConfig, AuthError, AuthService};

fn service(users: Arc<MockUserRepository>) -> AuthService<MockUserRepository> {
    AuthService::new(AuthConfig::new("integration-test-secret"), users)
}

#[tokio::test]
async fn test_signup_login_resolve_scenario() {
    let users = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&users));

    // Signup returns the identity without any credential material
    let user = auth.signup("a@x.com", "secret1").await.unwrap();
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.id.as_str().len(), 26);

    let json = serde_json::to_string(&user).unwrap();
    assert!(!json.contains("password"));

    // Login with the same credentials yields a token
    let token = auth.login("a@x.com", "secret1").await.unwrap();
    assert!(!token.is_empty());

    // The token resolves back to the same identity
    let resolved = auth.resolve(&token).await.unwrap();
    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.email, "a@x.com");

    // A token truncated by one character no longer resolves
    let result = auth.resolve(&token[..token.len() - 1]).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_login_failure_surface_is_identical() {
    let users = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&users));

    auth.signup("a@x.com", "secret1").await.unwrap();

    let wrong_password = auth.login("a@x.com", "wrong").await.unwrap_err();
    let unknown_email = auth.login("nobody@x.com", "secret1").await.unwrap_err();

    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert!(matches!(unknown_email, AuthError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert_eq!(wrong_password.status_code(), 401);
}

#[tokio::test]
async fn test_duplicate_signup_is_distinct_error() {
    let users = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&users));

    auth.signup("a@x.com", "secret1").await.unwrap();
    let result = auth.signup("a@x.com", "other").await;

    assert!(matches!(result, Err(AuthError::DuplicateEmail)));
    assert_eq!(result.unwrap_err().status_code(), 409);
}

#[tokio::test]
async fn test_resolve_vanished_subject_is_unauthorized() {
    let users = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&users));

    let user = auth.signup("a@x.com", "secret1").await.unwrap();
    let token = auth.login("a@x.com", "secret1").await.unwrap();

    // User deleted between login and resolve
    users.remove_user(user.id.as_str());

    let result = auth.resolve(&token).await;
    assert!(matches!(result, Err(AuthError::UnknownSubject)));
    assert_eq!(result.unwrap_err().status_code(), 401);
}

#[tokio::test]
async fn test_resolve_with_store_failure_is_unauthorized() {
    let users = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&users));
    let token = auth.tokens().issue("some-subject", Duration::from_secs(60)).unwrap();

    // Same secret, but every lookup fails
    let failing = AuthService::new(
        AuthConfig::new("integration-test-secret"),
        Arc::new(FailingUserRepository),
    );

    let result = failing.resolve(&token).await;
    assert!(matches!(result, Err(AuthError::UnknownSubject)));
}

#[tokio::test]
async fn test_expired_token_does_not_resolve() {
    let users = Arc::new(MockUserRepository::new());
    let auth = AuthService::new(
        AuthConfig::new("integration-test-secret").with_token_ttl(Duration::ZERO),
        Arc::clone(&users),
    );

    auth.signup("a@x.com", "secret1").await.unwrap();
    let token = auth.login("a@x.com", "secret1").await.unwrap();

    let result = auth.resolve(&token).await;
    assert!(matches!(result, Err(AuthError::TokenExpired)));
}

#[tokio::test]
async fn test_signup_ids_sort_by_creation() {
    let users = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&users));

    let first = auth.signup("a@x.com", "secret1").await.unwrap();
    tokio::time::sleep(Duration::from_millis(2)).await;
    let second = auth.signup("b@x.com", "secret1").await.unwrap();

    assert!(first.id.as_str() < second.id.as_str());
}
