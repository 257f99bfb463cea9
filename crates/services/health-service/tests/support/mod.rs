//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;

use domain::{HealthRecord, NewHealthRecord, NewUser, User};
use health_service_lib::infra::Database;
use health_service_lib::HealthApp;

/// Application over a fresh, fully migrated in-memory database.
pub async fn app() -> HealthApp {
    let db = Database::in_memory()
        .await
        .expect("in-memory database should open");
    HealthApp::from_database(db)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn new_user(first_name: &str, email: &str, is_doctor: bool) -> NewUser {
    NewUser {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: email.to_string(),
        password: "correct-horse-battery".to_string(),
        is_doctor,
    }
}

pub async fn register(app: &HealthApp, first_name: &str, email: &str, is_doctor: bool) -> User {
    app.accounts
        .register(new_user(first_name, email, is_doctor))
        .await
        .expect("registration should succeed")
}

pub async fn reading(
    app: &HealthApp,
    user_id: i32,
    weight: f64,
    height: f64,
    steps: i32,
    heart_rate: i32,
    date: NaiveDate,
) -> HealthRecord {
    app.health_log
        .record(NewHealthRecord {
            user_id,
            weight,
            height,
            steps,
            heart_rate,
            date,
        })
        .await
        .expect("reading should be stored")
}
