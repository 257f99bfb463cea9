//! Integration tests for account registration and login.

mod support;

use common::AppError;
use domain::{UpdateUser, UserRole};
use health_service_lib::repository::{UserDraft, UserRepository, UserStore};

use support::{app, new_user, register};

#[tokio::test]
async fn test_register_and_authenticate() {
    let app = app().await;
    let user = register(&app, "Chris", "chris@example.com", false).await;

    assert_eq!(user.role, UserRole::Patient);
    assert_ne!(user.password_hash, "correct-horse-battery");

    let logged_in = app
        .accounts
        .authenticate("chris@example.com", "correct-horse-battery")
        .await
        .unwrap();
    assert_eq!(logged_in.id, user.id);
}

#[tokio::test]
async fn test_wrong_password_is_invalid_credentials() {
    let app = app().await;
    register(&app, "Chris", "chris@example.com", false).await;

    assert!(matches!(
        app.accounts.authenticate("chris@example.com", "nope-nope-nope").await,
        Err(AppError::InvalidCredentials)
    ));
    assert!(matches!(
        app.accounts.authenticate("ghost@example.com", "correct-horse-battery").await,
        Err(AppError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = app().await;
    register(&app, "Chris", "chris@example.com", false).await;

    let result = app
        .accounts
        .register(new_user("Other", "chris@example.com", true))
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_short_password_is_rejected() {
    let app = app().await;
    let mut input = new_user("Chris", "chris@example.com", false);
    input.password = "short".to_string();

    assert!(matches!(
        app.accounts.register(input).await,
        Err(AppError::Validation(_))
    ));
    assert!(app.accounts.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_profile_and_promote_to_doctor() {
    let app = app().await;
    let user = register(&app, "Chris", "chris@example.com", false).await;

    let updated = app
        .accounts
        .update_profile(
            user.id,
            UpdateUser {
                last_name: Some("Cormier".to_string()),
                is_doctor: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.full_name(), "Chris Cormier");
    assert!(updated.is_doctor());
    assert_eq!(updated.email, "chris@example.com");
}

#[tokio::test]
async fn test_delete_user() {
    let app = app().await;
    let user = register(&app, "Chris", "chris@example.com", false).await;

    app.accounts.delete_user(user.id).await.unwrap();

    assert!(matches!(app.accounts.get_user(user.id).await, Err(AppError::NotFound)));
    assert!(matches!(app.accounts.delete_user(user.id).await, Err(AppError::NotFound)));
}

// =============================================================================
// Unique email enforced by the store
// =============================================================================

fn draft(email: &str) -> UserDraft {
    UserDraft {
        first_name: "Racer".to_string(),
        last_name: "Tester".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role: UserRole::Patient,
    }
}

#[tokio::test]
async fn test_store_insert_with_taken_email_conflicts() {
    let app = app().await;
    let store = UserStore::new(app.database().get_connection());

    store.create(draft("race@example.com")).await.unwrap();
    let result = store.create(draft("race@example.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_store_update_to_taken_email_conflicts() {
    let app = app().await;
    let store = UserStore::new(app.database().get_connection());

    store.create(draft("first@example.com")).await.unwrap();
    let second = store.create(draft("second@example.com")).await.unwrap();

    let result = store
        .update(
            second.id,
            UpdateUser {
                email: Some("first@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}
