//! Health log service - recording and reading health observations.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use common::{AppResult, OptionExt};
use domain::{HealthRecord, NewHealthRecord};

use crate::repository::HealthRecordRepository;

/// Health log service trait for dependency injection.
#[async_trait]
pub trait HealthLogService: Send + Sync {
    /// Store a new observation (weight and height must be positive)
    async fn record(&self, input: NewHealthRecord) -> AppResult<HealthRecord>;

    /// Get record by ID
    async fn get_record(&self, id: i32) -> AppResult<HealthRecord>;

    /// All records for a user, oldest first
    async fn records_for(&self, user_id: i32) -> AppResult<Vec<HealthRecord>>;

    /// Most recent record for a user
    async fn latest_for(&self, user_id: i32) -> AppResult<HealthRecord>;

    /// Replace the measurements of an existing record
    async fn update_record(&self, id: i32, input: NewHealthRecord) -> AppResult<HealthRecord>;

    /// Delete a record
    async fn delete_record(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of HealthLogService using repository.
pub struct HealthLog {
    repo: Arc<dyn HealthRecordRepository>,
}

impl HealthLog {
    /// Create new health log instance with repository
    pub fn new(repo: Arc<dyn HealthRecordRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl HealthLogService for HealthLog {
    async fn record(&self, input: NewHealthRecord) -> AppResult<HealthRecord> {
        input.validate()?;
        let record = self.repo.create(input).await?;
        tracing::debug!(record_id = record.id, user_id = record.user_id, "Health record stored");
        Ok(record)
    }

    async fn get_record(&self, id: i32) -> AppResult<HealthRecord> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn records_for(&self, user_id: i32) -> AppResult<Vec<HealthRecord>> {
        self.repo.list_by_user(user_id).await
    }

    async fn latest_for(&self, user_id: i32) -> AppResult<HealthRecord> {
        self.repo.latest_for_user(user_id).await?.ok_or_not_found()
    }

    async fn update_record(&self, id: i32, input: NewHealthRecord) -> AppResult<HealthRecord> {
        input.validate()?;
        self.repo.update(id, input).await
    }

    async fn delete_record(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
