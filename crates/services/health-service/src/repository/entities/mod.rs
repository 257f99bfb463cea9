//! SeaORM entities, one module per table.

pub mod doctor_patient;
pub mod doctor_profile;
pub mod health_data;
pub mod medicine_reminder;
pub mod recommendation;
pub mod user;
