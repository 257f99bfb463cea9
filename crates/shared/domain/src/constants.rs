//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Role name for regular (patient) accounts
pub const ROLE_PATIENT: &str = "patient";

/// Role name for accounts with the doctor flag set
pub const ROLE_DOCTOR: &str = "doctor";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Dates
// =============================================================================

/// Calendar date format used for every stored and displayed date (`yyyy-MM-dd`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Advisory thresholds
// =============================================================================

/// Heart rates below this value trigger the low heart rate advisory
pub const MIN_HEART_RATE: i32 = 60;

/// Heart rates above this value trigger the high heart rate advisory
pub const MAX_HEART_RATE: i32 = 100;

/// Daily step counts below this value trigger the step advisory
pub const MIN_DAILY_STEPS: i32 = 10_000;

/// BMI at or below this value is the underweight range
pub const BMI_UNDERWEIGHT: f64 = 18.5;

/// BMI above this value (and below obese) is the overweight range
pub const BMI_OVERWEIGHT: f64 = 25.0;

/// BMI at or above this value is the obese range
pub const BMI_OBESE: f64 = 30.0;
