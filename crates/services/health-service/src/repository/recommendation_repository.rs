//! Recommendation repository implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::entities::recommendation::{self, ActiveModel, Entity as RecommendationEntity};
use common::{AppError, AppResult};
use domain::Recommendation;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Recommendation repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// Append one row per text, all tagged with `user_id` and `date`.
    ///
    /// The batch commits atomically. No deduplication against earlier rows.
    async fn save_batch(
        &self,
        user_id: i32,
        texts: Vec<String>,
        date: NaiveDate,
    ) -> AppResult<Vec<Recommendation>>;

    /// All recommendations for a user in insertion order
    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<Recommendation>>;

    /// Number of stored recommendations for a user
    async fn count_by_user(&self, user_id: i32) -> AppResult<u64>;

    /// Remove every recommendation for a user, returning the rows removed
    async fn delete_by_user(&self, user_id: i32) -> AppResult<u64>;
}

/// Concrete implementation of RecommendationRepository
pub struct RecommendationStore {
    db: DatabaseConnection,
}

impl RecommendationStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecommendationRepository for RecommendationStore {
    async fn save_batch(
        &self,
        user_id: i32,
        texts: Vec<String>,
        date: NaiveDate,
    ) -> AppResult<Vec<Recommendation>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.db.begin().await.map_err(AppError::from)?;
        let mut saved = Vec::with_capacity(texts.len());

        for text in texts {
            let active_model = ActiveModel {
                user_id: Set(user_id),
                recommendation_text: Set(text),
                date: Set(date),
                ..Default::default()
            };
            // An early return drops `txn`, rolling the batch back
            let model = active_model.insert(&txn).await.map_err(AppError::from)?;
            saved.push(Recommendation::from(model));
        }

        txn.commit().await.map_err(AppError::from)?;
        Ok(saved)
    }

    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<Recommendation>> {
        let models = RecommendationEntity::find()
            .filter(recommendation::Column::UserId.eq(user_id))
            .order_by_asc(recommendation::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Recommendation::from).collect())
    }

    async fn count_by_user(&self, user_id: i32) -> AppResult<u64> {
        RecommendationEntity::find()
            .filter(recommendation::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn delete_by_user(&self, user_id: i32) -> AppResult<u64> {
        let result = RecommendationEntity::delete_many()
            .filter(recommendation::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
