//! Demo command - one doctor and one patient, end to end.
//!
//! Safe to run repeatedly against the same database: the demo accounts are
//! reused by email, while readings, recommendations and reminders accumulate.

use chrono::{Duration, Utc};
use serde::Serialize;

use common::{AppError, AppResult};
use domain::{
    Doctor, HealthRecord, MedicineReminder, NewHealthRecord, NewMedicineReminder, NewUser, User,
    UserResponse,
};

use super::print_json;
use crate::config::HealthServiceConfig;
use crate::HealthApp;

const DOCTOR_EMAIL: &str = "dr.house@example.com";
const PATIENT_EMAIL: &str = "chris.cormier@example.com";

/// Everything the demo session produced.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub doctor: Doctor,
    pub patient: UserResponse,
    pub reading: HealthRecord,
    pub recommendations: Vec<String>,
    pub due_reminders: Vec<MedicineReminder>,
    pub patients: Vec<UserResponse>,
}

/// Execute the demo command
pub async fn execute(config: HealthServiceConfig) -> AppResult<()> {
    let app = HealthApp::open(&config).await?;

    let report = run(&app).await?;
    print_json(&report)?;

    app.shutdown().await
}

/// Drive a full session against an open application.
pub async fn run(app: &HealthApp) -> AppResult<DemoReport> {
    let doctor = find_or_register(
        app,
        NewUser {
            first_name: "Gregory".to_string(),
            last_name: "House".to_string(),
            email: DOCTOR_EMAIL.to_string(),
            password: "vicodin-and-lupus".to_string(),
            is_doctor: true,
        },
    )
    .await?;
    let patient = find_or_register(
        app,
        NewUser {
            first_name: "Chris".to_string(),
            last_name: "Cormier".to_string(),
            email: PATIENT_EMAIL.to_string(),
            password: "theStrongestPassword".to_string(),
            is_doctor: false,
        },
    )
    .await?;

    let doctor = app
        .portal
        .update_doctor_profile(
            doctor.id,
            Some("MD-0042".to_string()),
            Some("Diagnostic Medicine".to_string()),
        )
        .await?;
    app.portal.assign_patient(doctor.user.id, patient.id).await?;

    let today = Utc::now().date_naive();
    let reading = app
        .health_log
        .record(NewHealthRecord {
            user_id: patient.id,
            weight: 195.0,
            height: 4.3,
            steps: 4_200,
            heart_rate: 58,
            date: today,
        })
        .await?;
    let recommendations = app.recommendations.generate(&reading).await?;

    app.reminders
        .add_reminder(NewMedicineReminder {
            user_id: patient.id,
            medicine_name: "Lisinopril".to_string(),
            dosage: "10mg".to_string(),
            schedule: "Once daily, morning".to_string(),
            start_date: today - Duration::days(1),
            end_date: today + Duration::days(6),
        })
        .await?;
    let due_reminders = app.reminders.due_today(patient.id).await?;

    let patients = app
        .portal
        .patients_of(doctor.user.id)
        .await?
        .iter()
        .map(UserResponse::from)
        .collect();

    tracing::info!(
        doctor_id = doctor.user.id,
        patient_id = patient.id,
        recommendations = recommendations.len(),
        "Demo session complete"
    );

    Ok(DemoReport {
        doctor,
        patient: UserResponse::from(patient),
        reading,
        recommendations,
        due_reminders,
        patients,
    })
}

async fn find_or_register(app: &HealthApp, input: NewUser) -> AppResult<User> {
    match app.accounts.get_user_by_email(&input.email).await {
        Ok(user) => Ok(user),
        Err(AppError::NotFound) => app.accounts.register(input).await,
        Err(e) => Err(e),
    }
}
