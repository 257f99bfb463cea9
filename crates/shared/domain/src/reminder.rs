//! Medicine reminder entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{DomainError, DomainResult};

/// Stored medicine reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicineReminder {
    pub id: i32,
    pub user_id: i32,
    pub medicine_name: String,
    pub dosage: String,
    pub schedule: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl MedicineReminder {
    /// A reminder is due on every day of its inclusive `[start_date, end_date]` window.
    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}

/// Reminder creation payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewMedicineReminder {
    pub user_id: i32,
    #[validate(length(min = 1, message = "Medicine name is required"))]
    pub medicine_name: String,
    #[validate(length(min = 1, message = "Dosage is required"))]
    pub dosage: String,
    #[validate(length(min = 1, message = "Schedule is required"))]
    pub schedule: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewMedicineReminder {
    /// Field validation plus the start <= end window check.
    pub fn check(&self) -> DomainResult<()> {
        self.validate()?;
        if self.start_date > self.end_date {
            return Err(DomainError::validation(
                "Reminder start date must not be after its end date",
            ));
        }
        Ok(())
    }
}
