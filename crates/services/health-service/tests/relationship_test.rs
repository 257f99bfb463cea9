//! Integration tests for the doctor -> patient directory.

mod support;

use common::AppError;
use health_service_lib::repository::{RelationshipRepository, RelationshipStore};

use support::{app, register};

// =============================================================================
// Link / Unlink
// =============================================================================

#[tokio::test]
async fn test_link_then_unlink() {
    let app = app().await;
    let directory = RelationshipStore::new(app.database().get_connection());

    let link = directory.link(1, 2).await.unwrap();
    assert_eq!((link.doctor_id, link.patient_id), (1, 2));
    assert!(directory.exists(1, 2).await.unwrap());
    // Edges are directed
    assert!(!directory.exists(2, 1).await.unwrap());

    assert_eq!(directory.unlink(1, 2).await.unwrap(), 1);
    assert!(!directory.exists(1, 2).await.unwrap());
}

#[tokio::test]
async fn test_duplicate_links_are_kept_and_removed_together() {
    let app = app().await;
    let directory = RelationshipStore::new(app.database().get_connection());

    let first = directory.link(3, 4).await.unwrap();
    let second = directory.link(3, 4).await.unwrap();
    assert_ne!(first.id, second.id);

    assert_eq!(directory.unlink(3, 4).await.unwrap(), 2);
}

#[tokio::test]
async fn test_unlink_without_edge_is_not_found() {
    let app = app().await;
    let directory = RelationshipStore::new(app.database().get_connection());

    assert!(matches!(directory.unlink(5, 6).await, Err(AppError::NotFound)));
}

// =============================================================================
// Directory queries
// =============================================================================

#[tokio::test]
async fn test_patients_of_doctor_without_patients_is_empty() {
    let app = app().await;
    let doctor = register(&app, "Lonely", "lonely@example.com", true).await;
    let directory = RelationshipStore::new(app.database().get_connection());

    assert!(directory.patients_of(doctor.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_patients_and_doctors_are_distinct_users() {
    let app = app().await;
    let doctor = register(&app, "Doc", "doc@example.com", true).await;
    let other_doctor = register(&app, "Other", "other@example.com", true).await;
    let alice = register(&app, "Alice", "alice@example.com", false).await;
    let bob = register(&app, "Bob", "bob@example.com", false).await;
    let directory = RelationshipStore::new(app.database().get_connection());

    directory.link(doctor.id, alice.id).await.unwrap();
    directory.link(doctor.id, alice.id).await.unwrap();
    directory.link(doctor.id, bob.id).await.unwrap();
    directory.link(other_doctor.id, alice.id).await.unwrap();

    let mut patients: Vec<i32> = directory
        .patients_of(doctor.id)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    patients.sort_unstable();
    assert_eq!(patients, vec![alice.id, bob.id]);

    let mut doctors: Vec<i32> = directory
        .doctors_of(alice.id)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    doctors.sort_unstable();
    assert_eq!(doctors, vec![doctor.id, other_doctor.id]);
}

#[tokio::test]
async fn test_edges_to_missing_users_are_skipped_by_joins() {
    let app = app().await;
    let doctor = register(&app, "Doc", "doc@example.com", true).await;
    let directory = RelationshipStore::new(app.database().get_connection());

    directory.link(doctor.id, 999).await.unwrap();

    assert!(directory.exists(doctor.id, 999).await.unwrap());
    assert!(directory.patients_of(doctor.id).await.unwrap().is_empty());
}
