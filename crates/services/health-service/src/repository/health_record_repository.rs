//! Health record repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::health_data::{self, ActiveModel, Entity as HealthDataEntity};
use common::{AppError, AppResult};
use domain::{HealthRecord, NewHealthRecord};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Health record repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HealthRecordRepository: Send + Sync {
    /// Insert a new record
    async fn create(&self, input: NewHealthRecord) -> AppResult<HealthRecord>;

    /// Find record by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<HealthRecord>>;

    /// All records owned by a user, oldest first
    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<HealthRecord>>;

    /// The record with the latest date for a user
    async fn latest_for_user(&self, user_id: i32) -> AppResult<Option<HealthRecord>>;

    /// Replace every measured field of a record; `NotFound` if missing
    async fn update(&self, id: i32, input: NewHealthRecord) -> AppResult<HealthRecord>;

    /// Delete record by ID; `NotFound` if no row was removed
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of HealthRecordRepository
pub struct HealthRecordStore {
    db: DatabaseConnection,
}

impl HealthRecordStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthRecordRepository for HealthRecordStore {
    async fn create(&self, input: NewHealthRecord) -> AppResult<HealthRecord> {
        let active_model = ActiveModel {
            user_id: Set(input.user_id),
            weight: Set(input.weight),
            height: Set(input.height),
            steps: Set(input.steps),
            heart_rate: Set(input.heart_rate),
            date: Set(input.date),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(HealthRecord::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<HealthRecord>> {
        let result = HealthDataEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(HealthRecord::from))
    }

    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<HealthRecord>> {
        let models = HealthDataEntity::find()
            .filter(health_data::Column::UserId.eq(user_id))
            .order_by_asc(health_data::Column::Date)
            .order_by_asc(health_data::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(HealthRecord::from).collect())
    }

    async fn latest_for_user(&self, user_id: i32) -> AppResult<Option<HealthRecord>> {
        let result = HealthDataEntity::find()
            .filter(health_data::Column::UserId.eq(user_id))
            .order_by_desc(health_data::Column::Date)
            .order_by_desc(health_data::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(HealthRecord::from))
    }

    async fn update(&self, id: i32, input: NewHealthRecord) -> AppResult<HealthRecord> {
        let record = HealthDataEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = record.into();
        active.weight = Set(input.weight);
        active.height = Set(input.height);
        active.steps = Set(input.steps);
        active.heart_rate = Set(input.heart_rate);
        active.date = Set(input.date);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(HealthRecord::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = HealthDataEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
