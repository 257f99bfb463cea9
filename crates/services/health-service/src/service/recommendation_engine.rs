//! Recommendation engine - turns a health record into stored advice.
//!
//! The rules themselves live in [`domain::advisory`]; this service applies
//! them and appends the resulting texts to the recommendation store.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{advisory, HealthRecord, Recommendation};

use crate::repository::{HealthRecordRepository, RecommendationRepository};

/// Recommendation service trait for dependency injection.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Evaluate `record` and persist every advisory, tagged with the
    /// record's owner and today's date.
    ///
    /// Returns exactly the texts that were stored, in rule order. Calling
    /// this twice stores the batch twice.
    async fn generate(&self, record: &HealthRecord) -> AppResult<Vec<String>>;

    /// Load a stored record and generate for it
    async fn generate_for_record(&self, record_id: i32) -> AppResult<Vec<String>>;

    /// Stored recommendations for a user, oldest first
    async fn recommendations_for(&self, user_id: i32) -> AppResult<Vec<Recommendation>>;

    /// Delete every stored recommendation for a user
    async fn clear_recommendations(&self, user_id: i32) -> AppResult<u64>;
}

/// Concrete implementation of RecommendationService.
pub struct RecommendationEngine {
    records: Arc<dyn HealthRecordRepository>,
    recommendations: Arc<dyn RecommendationRepository>,
    today: fn() -> NaiveDate,
}

impl RecommendationEngine {
    /// Create new engine stamping rows with the current UTC date
    pub fn new(
        records: Arc<dyn HealthRecordRepository>,
        recommendations: Arc<dyn RecommendationRepository>,
    ) -> Self {
        Self {
            records,
            recommendations,
            today: || Utc::now().date_naive(),
        }
    }

    /// Replace the clock used to date generated rows
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}

#[async_trait]
impl RecommendationService for RecommendationEngine {
    async fn generate(&self, record: &HealthRecord) -> AppResult<Vec<String>> {
        let texts = advisory::evaluate_texts(record);

        let saved = self
            .recommendations
            .save_batch(record.user_id, texts, (self.today)())
            .await?;

        tracing::info!(
            user_id = record.user_id,
            record_id = record.id,
            count = saved.len(),
            "Recommendations generated"
        );

        Ok(saved.into_iter().map(|r| r.text).collect())
    }

    async fn generate_for_record(&self, record_id: i32) -> AppResult<Vec<String>> {
        let record = self.records.find_by_id(record_id).await?.ok_or_not_found()?;
        self.generate(&record).await
    }

    async fn recommendations_for(&self, user_id: i32) -> AppResult<Vec<Recommendation>> {
        self.recommendations.list_by_user(user_id).await
    }

    async fn clear_recommendations(&self, user_id: i32) -> AppResult<u64> {
        let removed = self.recommendations.delete_by_user(user_id).await?;
        tracing::info!(user_id, removed, "Recommendations cleared");
        Ok(removed)
    }
}
