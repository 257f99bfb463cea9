//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_health_data_table;
mod m20240101_000003_create_medicine_reminders_table;
mod m20240101_000004_create_recommendations_table;
mod m20240101_000005_create_doctor_patient_table;
mod m20240102_000001_create_doctor_profiles_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_health_data_table::Migration),
            Box::new(m20240101_000003_create_medicine_reminders_table::Migration),
            Box::new(m20240101_000004_create_recommendations_table::Migration),
            Box::new(m20240101_000005_create_doctor_patient_table::Migration),
            Box::new(m20240102_000001_create_doctor_profiles_table::Migration),
        ]
    }
}
