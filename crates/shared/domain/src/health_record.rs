//! Health record entity - one observation of a user's vital metrics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored health observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: i32,
    pub user_id: i32,
    pub weight: f64,
    pub height: f64,
    pub steps: i32,
    pub heart_rate: i32,
    pub date: NaiveDate,
}

impl HealthRecord {
    /// Body-mass indicator as the plain ratio `weight / height`.
    ///
    /// Height is not squared. Advisory thresholds are applied to this value
    /// as-is; a zero height yields infinity or NaN.
    pub fn bmi(&self) -> f64 {
        self.weight / self.height
    }
}

/// Health record creation (and full replacement) payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewHealthRecord {
    pub user_id: i32,
    #[validate(range(exclusive_min = 0.0, message = "Weight must be positive"))]
    pub weight: f64,
    #[validate(range(exclusive_min = 0.0, message = "Height must be positive"))]
    pub height: f64,
    #[validate(range(min = 0, message = "Step count cannot be negative"))]
    pub steps: i32,
    #[validate(range(min = 0, message = "Heart rate cannot be negative"))]
    pub heart_rate: i32,
    pub date: NaiveDate,
}
