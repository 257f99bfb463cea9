//! Service layer for business logic.

mod account_service;
mod doctor_portal;
mod health_log;
mod recommendation_engine;
mod reminder_service;

pub use account_service::{AccountManager, AccountService};
pub use doctor_portal::{DoctorPortal, DoctorPortalService};
pub use health_log::{HealthLog, HealthLogService};
pub use recommendation_engine::{RecommendationEngine, RecommendationService};
pub use reminder_service::{ReminderBook, ReminderService};
