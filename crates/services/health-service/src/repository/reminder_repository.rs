//! Medicine reminder repository implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::medicine_reminder::{self, ActiveModel, Entity as ReminderEntity};
use common::{AppError, AppResult};
use domain::{MedicineReminder, NewMedicineReminder};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Reminder repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Insert a new reminder
    async fn create(&self, input: NewMedicineReminder) -> AppResult<MedicineReminder>;

    /// All reminders owned by a user
    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<MedicineReminder>>;

    /// Reminders whose `[start_date, end_date]` window contains `day`
    async fn list_due(&self, user_id: i32, day: NaiveDate) -> AppResult<Vec<MedicineReminder>>;

    /// Delete reminder by ID; `NotFound` if no row was removed
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ReminderRepository
pub struct ReminderStore {
    db: DatabaseConnection,
}

impl ReminderStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReminderRepository for ReminderStore {
    async fn create(&self, input: NewMedicineReminder) -> AppResult<MedicineReminder> {
        let active_model = ActiveModel {
            user_id: Set(input.user_id),
            medicine_name: Set(input.medicine_name),
            dosage: Set(input.dosage),
            schedule: Set(input.schedule),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(MedicineReminder::from(model))
    }

    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<MedicineReminder>> {
        let models = ReminderEntity::find()
            .filter(medicine_reminder::Column::UserId.eq(user_id))
            .order_by_asc(medicine_reminder::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(MedicineReminder::from).collect())
    }

    async fn list_due(&self, user_id: i32, day: NaiveDate) -> AppResult<Vec<MedicineReminder>> {
        let models = ReminderEntity::find()
            .filter(medicine_reminder::Column::UserId.eq(user_id))
            .filter(medicine_reminder::Column::StartDate.lte(day))
            .filter(medicine_reminder::Column::EndDate.gte(day))
            .order_by_asc(medicine_reminder::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(MedicineReminder::from).collect())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ReminderEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
