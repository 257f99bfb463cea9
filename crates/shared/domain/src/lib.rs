//! Domain layer - Core health-tracking entities and rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! users, health records, medicine reminders, doctor profiles, the advisory
//! rules behind recommendations, password hashing and the date codec.

pub mod advisory;
pub mod constants;
pub mod dates;
pub mod doctor;
pub mod error;
pub mod health_record;
pub mod password;
pub mod recommendation;
pub mod reminder;
pub mod user;

pub use advisory::Advisory;
pub use constants::*;
pub use doctor::{CareLink, Doctor, DoctorProfile};
pub use error::{DomainError, DomainResult};
pub use health_record::{HealthRecord, NewHealthRecord};
pub use password::Password;
pub use recommendation::Recommendation;
pub use reminder::{MedicineReminder, NewMedicineReminder};
pub use user::{NewUser, UpdateUser, User, UserResponse, UserRole};
