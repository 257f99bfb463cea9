//! Repository layer for data access.

pub mod entities;
mod doctor_profile_repository;
mod health_record_repository;
mod recommendation_repository;
mod relationship_repository;
mod reminder_repository;
mod user_repository;

pub use doctor_profile_repository::{DoctorProfileRepository, DoctorProfileStore};
pub use health_record_repository::{HealthRecordRepository, HealthRecordStore};
pub use recommendation_repository::{RecommendationRepository, RecommendationStore};
pub use relationship_repository::{RelationshipRepository, RelationshipStore};
pub use reminder_repository::{ReminderRepository, ReminderStore};
pub use user_repository::{UserDraft, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use doctor_profile_repository::MockDoctorProfileRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use health_record_repository::MockHealthRecordRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use recommendation_repository::MockRecommendationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use relationship_repository::MockRelationshipRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use reminder_repository::MockReminderRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
