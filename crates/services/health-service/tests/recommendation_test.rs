//! Integration tests for recommendation generation and storage.

mod support;

use common::AppError;
use domain::Advisory;
use health_service_lib::repository::{RecommendationRepository, RecommendationStore};
use sea_orm::ConnectionTrait;

use support::{app, day, reading, register};

#[tokio::test]
async fn test_generate_stores_one_row_per_advisory() {
    let app = app().await;
    let patient = register(&app, "Chris", "chris@example.com", false).await;
    let record = reading(&app, patient.id, 195.0, 4.3, 9_999, 59, day(2024, 3, 1)).await;

    let texts = app.recommendations.generate(&record).await.unwrap();
    assert_eq!(
        texts,
        vec![
            Advisory::LowHeartRate.text().to_string(),
            Advisory::LowStepCount.text().to_string(),
            Advisory::Obese.text().to_string(),
        ]
    );

    let stored = app.recommendations.recommendations_for(patient.id).await.unwrap();
    let stored_texts: Vec<String> = stored.iter().map(|r| r.text.clone()).collect();
    assert_eq!(stored_texts, texts);
    assert!(stored.iter().all(|r| r.user_id == patient.id));
}

#[tokio::test]
async fn test_generate_twice_doubles_rows() {
    let app = app().await;
    let patient = register(&app, "Chris", "chris@example.com", false).await;
    let record = reading(&app, patient.id, 195.0, 4.3, 12_000, 101, day(2024, 3, 1)).await;
    let store = RecommendationStore::new(app.database().get_connection());

    let first = app.recommendations.generate(&record).await.unwrap();
    assert_eq!(store.count_by_user(patient.id).await.unwrap(), first.len() as u64);

    app.recommendations.generate(&record).await.unwrap();
    assert_eq!(
        store.count_by_user(patient.id).await.unwrap(),
        2 * first.len() as u64
    );
}

#[tokio::test]
async fn test_healthy_reading_stores_nothing() {
    let app = app().await;
    let patient = register(&app, "Fit", "fit@example.com", false).await;
    let record = reading(&app, patient.id, 100.0, 5.0, 10_000, 72, day(2024, 3, 1)).await;

    assert!(app.recommendations.generate(&record).await.unwrap().is_empty());
    assert!(app
        .recommendations
        .recommendations_for(patient.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_generate_for_record() {
    let app = app().await;
    let patient = register(&app, "Chris", "chris@example.com", false).await;
    let record = reading(&app, patient.id, 50.0, 5.0, 10_000, 80, day(2024, 3, 1)).await;

    let texts = app
        .recommendations
        .generate_for_record(record.id)
        .await
        .unwrap();
    assert_eq!(texts, vec![Advisory::Underweight.text().to_string()]);

    assert!(matches!(
        app.recommendations.generate_for_record(record.id + 100).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_clear_recommendations() {
    let app = app().await;
    let patient = register(&app, "Chris", "chris@example.com", false).await;
    let record = reading(&app, patient.id, 195.0, 4.3, 9_999, 59, day(2024, 3, 1)).await;

    app.recommendations.generate(&record).await.unwrap();
    assert_eq!(
        app.recommendations.clear_recommendations(patient.id).await.unwrap(),
        3
    );
    assert_eq!(
        app.recommendations.clear_recommendations(patient.id).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn test_batch_interrupted_midway_stores_nothing() {
    let app = app().await;
    let patient = register(&app, "Chris", "chris@example.com", false).await;
    let store = RecommendationStore::new(app.database().get_connection());

    // Let the first row of a batch in, then fail the second
    app.database()
        .connection()
        .execute_unprepared(
            "CREATE TRIGGER reject_second_recommendation
             BEFORE INSERT ON recommendations
             WHEN (SELECT COUNT(*) FROM recommendations) >= 1
             BEGIN
                 SELECT RAISE(ABORT, 'recommendation batch interrupted');
             END;",
        )
        .await
        .unwrap();

    let texts = vec![
        Advisory::LowHeartRate.text().to_string(),
        Advisory::LowStepCount.text().to_string(),
        Advisory::Obese.text().to_string(),
    ];
    let result = store.save_batch(patient.id, texts, day(2024, 3, 1)).await;

    assert!(matches!(result, Err(AppError::Database(_))));
    assert_eq!(store.count_by_user(patient.id).await.unwrap(), 0);
}
