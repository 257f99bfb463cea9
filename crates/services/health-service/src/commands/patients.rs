//! Patients command - the doctor's patient list.

use common::AppResult;
use domain::UserResponse;

use super::print_json;
use crate::cli::PatientsArgs;
use crate::config::HealthServiceConfig;
use crate::HealthApp;

/// Execute the patients command
pub async fn execute(args: PatientsArgs, config: HealthServiceConfig) -> AppResult<()> {
    let app = HealthApp::open(&config).await?;

    let doctor = app.portal.doctor_by_id(args.doctor_id).await?;
    let patients: Vec<UserResponse> = app
        .portal
        .patients_of(doctor.user.id)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    println!("Patients of Dr. {}:", doctor.user.full_name());
    print_json(&patients)?;

    app.shutdown().await
}
