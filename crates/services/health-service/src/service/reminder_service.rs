//! Reminder service - medicine reminders and their due dates.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use common::AppResult;
use domain::{MedicineReminder, NewMedicineReminder};

use crate::repository::ReminderRepository;

/// Reminder service trait for dependency injection.
#[async_trait]
pub trait ReminderService: Send + Sync {
    /// Store a new reminder (start date must not be after end date)
    async fn add_reminder(&self, input: NewMedicineReminder) -> AppResult<MedicineReminder>;

    /// All reminders for a user
    async fn reminders_for(&self, user_id: i32) -> AppResult<Vec<MedicineReminder>>;

    /// Reminders due on `day`
    async fn due_on(&self, user_id: i32, day: NaiveDate) -> AppResult<Vec<MedicineReminder>>;

    /// Reminders due today (UTC)
    async fn due_today(&self, user_id: i32) -> AppResult<Vec<MedicineReminder>> {
        self.due_on(user_id, Utc::now().date_naive()).await
    }

    /// Delete a reminder
    async fn delete_reminder(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ReminderService using repository.
pub struct ReminderBook {
    repo: Arc<dyn ReminderRepository>,
}

impl ReminderBook {
    /// Create new reminder service instance with repository
    pub fn new(repo: Arc<dyn ReminderRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ReminderService for ReminderBook {
    async fn add_reminder(&self, input: NewMedicineReminder) -> AppResult<MedicineReminder> {
        input.check()?;
        let reminder = self.repo.create(input).await?;
        tracing::debug!(reminder_id = reminder.id, user_id = reminder.user_id, "Reminder added");
        Ok(reminder)
    }

    async fn reminders_for(&self, user_id: i32) -> AppResult<Vec<MedicineReminder>> {
        self.repo.list_by_user(user_id).await
    }

    async fn due_on(&self, user_id: i32, day: NaiveDate) -> AppResult<Vec<MedicineReminder>> {
        self.repo.list_due(user_id, day).await
    }

    async fn delete_reminder(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::repository::MockReminderRepository;
    use common::AppError;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[tokio::test]
    async fn test_add_reminder_rejects_inverted_window() {
        let mut repo = MockReminderRepository::new();
        repo.expect_create().never();

        let service = ReminderBook::new(Arc::new(repo));
        let result = service
            .add_reminder(NewMedicineReminder {
                user_id: 2,
                medicine_name: "Ibuprofen".to_string(),
                dosage: "200mg".to_string(),
                schedule: "Twice daily".to_string(),
                start_date: day(10),
                end_date: day(1),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_due_today_queries_current_date() {
        let today = Utc::now().date_naive();

        let mut repo = MockReminderRepository::new();
        repo.expect_list_due()
            .with(eq(2), eq(today))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = ReminderBook::new(Arc::new(repo));
        assert!(service.due_today(2).await.unwrap().is_empty());
    }
}
