//! Relationship directory - directed doctor -> patient edges.
//!
//! Edges are plain rows: linking never checks for an existing edge, and
//! neither endpoint is checked against `users`. Callers that need those
//! guarantees go through the doctor portal.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QuerySelect, RelationTrait, Set,
};

use super::entities::doctor_patient::{self, ActiveModel, Entity as DoctorPatientEntity};
use super::entities::user::Entity as UserEntity;
use common::{AppError, AppResult};
use domain::{CareLink, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Relationship repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RelationshipRepository: Send + Sync {
    /// Insert one edge. Duplicate edges are permitted.
    async fn link(&self, doctor_id: i32, patient_id: i32) -> AppResult<CareLink>;

    /// Delete every matching edge, returning how many were removed.
    ///
    /// `NotFound` when no edge matched.
    async fn unlink(&self, doctor_id: i32, patient_id: i32) -> AppResult<u64>;

    /// True if at least one matching edge exists
    async fn exists(&self, doctor_id: i32, patient_id: i32) -> AppResult<bool>;

    /// Distinct users linked as patients of `doctor_id`; order unspecified
    async fn patients_of(&self, doctor_id: i32) -> AppResult<Vec<User>>;

    /// Distinct users linked as doctors of `patient_id`; order unspecified
    async fn doctors_of(&self, patient_id: i32) -> AppResult<Vec<User>>;
}

/// Concrete implementation of RelationshipRepository
pub struct RelationshipStore {
    db: DatabaseConnection,
}

impl RelationshipStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Users on the far side of `via`, filtered by the near endpoint column.
    async fn linked_users(
        &self,
        via: doctor_patient::Relation,
        endpoint: doctor_patient::Column,
        id: i32,
    ) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .join(JoinType::InnerJoin, via.def().rev())
            .filter(endpoint.eq(id))
            .distinct()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}

#[async_trait]
impl RelationshipRepository for RelationshipStore {
    async fn link(&self, doctor_id: i32, patient_id: i32) -> AppResult<CareLink> {
        let active_model = ActiveModel {
            doctor_id: Set(doctor_id),
            patient_id: Set(patient_id),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(CareLink::from(model))
    }

    async fn unlink(&self, doctor_id: i32, patient_id: i32) -> AppResult<u64> {
        let result = DoctorPatientEntity::delete_many()
            .filter(doctor_patient::Column::DoctorId.eq(doctor_id))
            .filter(doctor_patient::Column::PatientId.eq(patient_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(result.rows_affected)
    }

    async fn exists(&self, doctor_id: i32, patient_id: i32) -> AppResult<bool> {
        let count = DoctorPatientEntity::find()
            .filter(doctor_patient::Column::DoctorId.eq(doctor_id))
            .filter(doctor_patient::Column::PatientId.eq(patient_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn patients_of(&self, doctor_id: i32) -> AppResult<Vec<User>> {
        self.linked_users(
            doctor_patient::Relation::Patient,
            doctor_patient::Column::DoctorId,
            doctor_id,
        )
        .await
    }

    async fn doctors_of(&self, patient_id: i32) -> AppResult<Vec<User>> {
        self.linked_users(
            doctor_patient::Relation::Doctor,
            doctor_patient::Column::PatientId,
            patient_id,
        )
        .await
    }
}
