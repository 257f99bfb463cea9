//! Doctor profile repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use super::entities::doctor_profile::{ActiveModel, Entity as DoctorProfileEntity};
use common::{AppError, AppResult};
use domain::DoctorProfile;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Doctor profile repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DoctorProfileRepository: Send + Sync {
    /// Profile stored for a doctor account, if any
    async fn find(&self, user_id: i32) -> AppResult<Option<DoctorProfile>>;

    /// Insert or replace the profile keyed by `profile.user_id`
    async fn upsert(&self, profile: DoctorProfile) -> AppResult<DoctorProfile>;
}

/// Concrete implementation of DoctorProfileRepository
pub struct DoctorProfileStore {
    db: DatabaseConnection,
}

impl DoctorProfileStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DoctorProfileRepository for DoctorProfileStore {
    async fn find(&self, user_id: i32) -> AppResult<Option<DoctorProfile>> {
        let result = DoctorProfileEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(DoctorProfile::from))
    }

    async fn upsert(&self, profile: DoctorProfile) -> AppResult<DoctorProfile> {
        let existing = DoctorProfileEntity::find_by_id(profile.user_id)
            .one(&self.db)
            .await?;

        let model = match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.medical_license_number = Set(profile.medical_license_number);
                active.specialization = Set(profile.specialization);
                active.update(&self.db).await?
            }
            None => {
                ActiveModel {
                    user_id: Set(profile.user_id),
                    medical_license_number: Set(profile.medical_license_number),
                    specialization: Set(profile.specialization),
                }
                .insert(&self.db)
                .await?
            }
        };

        Ok(DoctorProfile::from(model))
    }
}
