//! Doctor portal - the doctor's view over accounts, relationships and records.
//!
//! Assigning and releasing patients checks both endpoints against the user
//! store before touching the relationship directory.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{CareLink, Doctor, DoctorProfile, HealthRecord, User};

use crate::repository::{
    DoctorProfileRepository, HealthRecordRepository, RelationshipRepository, UserRepository,
};

/// Doctor portal trait for dependency injection.
#[async_trait]
pub trait DoctorPortalService: Send + Sync {
    /// Doctor account with stored profile; `NotFound` unless the user exists
    /// and carries the doctor flag
    async fn doctor_by_id(&self, id: i32) -> AppResult<Doctor>;

    /// Set license number and specialization for a doctor
    async fn update_doctor_profile(
        &self,
        doctor_id: i32,
        medical_license_number: Option<String>,
        specialization: Option<String>,
    ) -> AppResult<Doctor>;

    /// Link a patient to a doctor after checking both accounts
    async fn assign_patient(&self, doctor_id: i32, patient_id: i32) -> AppResult<CareLink>;

    /// Remove every link between a doctor and a patient after checking
    /// both accounts; `NotFound` when they were not linked
    async fn release_patient(&self, doctor_id: i32, patient_id: i32) -> AppResult<u64>;

    /// Patients linked to a doctor (empty when none)
    async fn patients_of(&self, doctor_id: i32) -> AppResult<Vec<User>>;

    /// Doctors linked to a patient (empty when none)
    async fn doctors_of(&self, patient_id: i32) -> AppResult<Vec<User>>;

    /// Health records of a patient, oldest first
    async fn records_of(&self, patient_id: i32) -> AppResult<Vec<HealthRecord>>;

    /// Most recent health record of a patient
    async fn latest_record_of(&self, patient_id: i32) -> AppResult<HealthRecord>;
}

/// Concrete implementation of DoctorPortalService.
pub struct DoctorPortal {
    users: Arc<dyn UserRepository>,
    profiles: Arc<dyn DoctorProfileRepository>,
    relationships: Arc<dyn RelationshipRepository>,
    records: Arc<dyn HealthRecordRepository>,
}

impl DoctorPortal {
    /// Create new portal over the given repositories
    pub fn new(
        users: Arc<dyn UserRepository>,
        profiles: Arc<dyn DoctorProfileRepository>,
        relationships: Arc<dyn RelationshipRepository>,
        records: Arc<dyn HealthRecordRepository>,
    ) -> Self {
        Self {
            users,
            profiles,
            relationships,
            records,
        }
    }

    async fn doctor_account(&self, id: i32) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .filter(User::is_doctor)
            .ok_or_not_found()
    }

    async fn check_endpoints(&self, doctor_id: i32, patient_id: i32) -> AppResult<()> {
        self.doctor_account(doctor_id).await?;
        self.users.find_by_id(patient_id).await?.ok_or_not_found()?;
        Ok(())
    }
}

#[async_trait]
impl DoctorPortalService for DoctorPortal {
    async fn doctor_by_id(&self, id: i32) -> AppResult<Doctor> {
        let user = self.doctor_account(id).await?;
        let profile = self.profiles.find(id).await?;
        Ok(Doctor::new(user, profile))
    }

    async fn update_doctor_profile(
        &self,
        doctor_id: i32,
        medical_license_number: Option<String>,
        specialization: Option<String>,
    ) -> AppResult<Doctor> {
        let user = self.doctor_account(doctor_id).await?;
        let profile = self
            .profiles
            .upsert(DoctorProfile {
                user_id: doctor_id,
                medical_license_number,
                specialization,
            })
            .await?;
        Ok(Doctor::new(user, Some(profile)))
    }

    async fn assign_patient(&self, doctor_id: i32, patient_id: i32) -> AppResult<CareLink> {
        if doctor_id == patient_id {
            return Err(AppError::validation("A doctor cannot be their own patient"));
        }
        self.check_endpoints(doctor_id, patient_id).await?;
        let link = self.relationships.link(doctor_id, patient_id).await?;
        tracing::info!(doctor_id, patient_id, "Patient assigned");
        Ok(link)
    }

    async fn release_patient(&self, doctor_id: i32, patient_id: i32) -> AppResult<u64> {
        self.check_endpoints(doctor_id, patient_id).await?;
        let removed = self.relationships.unlink(doctor_id, patient_id).await?;
        tracing::info!(doctor_id, patient_id, removed, "Patient released");
        Ok(removed)
    }

    async fn patients_of(&self, doctor_id: i32) -> AppResult<Vec<User>> {
        self.relationships.patients_of(doctor_id).await
    }

    async fn doctors_of(&self, patient_id: i32) -> AppResult<Vec<User>> {
        self.relationships.doctors_of(patient_id).await
    }

    async fn records_of(&self, patient_id: i32) -> AppResult<Vec<HealthRecord>> {
        self.records.list_by_user(patient_id).await
    }

    async fn latest_record_of(&self, patient_id: i32) -> AppResult<HealthRecord> {
        self.records.latest_for_user(patient_id).await?.ok_or_not_found()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::repository::{
        MockDoctorProfileRepository, MockHealthRecordRepository, MockRelationshipRepository,
        MockUserRepository,
    };
    use domain::UserRole;

    fn user(id: i32, role: UserRole) -> User {
        User {
            id,
            first_name: "Test".to_string(),
            last_name: format!("User{}", id),
            email: format!("user{}@example.com", id),
            password_hash: "hashed".to_string(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// User 1 is a doctor, user 2 a patient, anything else is missing
    fn directory_users() -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|id| {
            Ok(match id {
                1 => Some(user(1, UserRole::Doctor)),
                2 => Some(user(2, UserRole::Patient)),
                _ => None,
            })
        });
        users
    }

    fn portal(
        users: MockUserRepository,
        profiles: MockDoctorProfileRepository,
        relationships: MockRelationshipRepository,
    ) -> DoctorPortal {
        DoctorPortal::new(
            Arc::new(users),
            Arc::new(profiles),
            Arc::new(relationships),
            Arc::new(MockHealthRecordRepository::new()),
        )
    }

    #[tokio::test]
    async fn test_doctor_by_id_reads_stored_profile() {
        let mut profiles = MockDoctorProfileRepository::new();
        profiles.expect_find().with(eq(1)).returning(|id| {
            Ok(Some(DoctorProfile {
                user_id: id,
                medical_license_number: Some("LIC-1234".to_string()),
                specialization: Some("Cardiology".to_string()),
            }))
        });

        let portal = portal(directory_users(), profiles, MockRelationshipRepository::new());
        let doctor = portal.doctor_by_id(1).await.unwrap();

        assert_eq!(doctor.user.id, 1);
        assert_eq!(doctor.medical_license_number.as_deref(), Some("LIC-1234"));
        assert_eq!(doctor.specialization.as_deref(), Some("Cardiology"));
    }

    #[tokio::test]
    async fn test_doctor_without_profile_has_unknown_fields() {
        let mut profiles = MockDoctorProfileRepository::new();
        profiles.expect_find().returning(|_| Ok(None));

        let portal = portal(directory_users(), profiles, MockRelationshipRepository::new());
        let doctor = portal.doctor_by_id(1).await.unwrap();

        assert!(doctor.medical_license_number.is_none());
        assert!(doctor.specialization.is_none());
    }

    #[tokio::test]
    async fn test_doctor_by_id_rejects_patients() {
        let mut profiles = MockDoctorProfileRepository::new();
        profiles.expect_find().never();

        let portal = portal(directory_users(), profiles, MockRelationshipRepository::new());

        assert!(matches!(portal.doctor_by_id(2).await, Err(AppError::NotFound)));
        assert!(matches!(portal.doctor_by_id(99).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_assign_patient_checks_endpoints() {
        let mut relationships = MockRelationshipRepository::new();
        relationships
            .expect_link()
            .with(eq(1), eq(2))
            .times(1)
            .returning(|doctor_id, patient_id| {
                Ok(CareLink {
                    id: 1,
                    doctor_id,
                    patient_id,
                })
            });

        let portal = portal(
            directory_users(),
            MockDoctorProfileRepository::new(),
            relationships,
        );

        assert_eq!(portal.assign_patient(1, 2).await.unwrap().patient_id, 2);
        // patient as doctor
        assert!(matches!(portal.assign_patient(2, 1).await, Err(AppError::NotFound)));
        // unknown patient
        assert!(matches!(portal.assign_patient(1, 42).await, Err(AppError::NotFound)));
        assert!(matches!(portal.assign_patient(1, 1).await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_release_patient_requires_doctor() {
        let mut relationships = MockRelationshipRepository::new();
        relationships
            .expect_unlink()
            .with(eq(1), eq(2))
            .times(1)
            .returning(|_, _| Ok(2));

        let portal = portal(
            directory_users(),
            MockDoctorProfileRepository::new(),
            relationships,
        );

        assert_eq!(portal.release_patient(1, 2).await.unwrap(), 2);
        assert!(matches!(portal.release_patient(2, 1).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_patients_of_empty_is_not_an_error() {
        let mut relationships = MockRelationshipRepository::new();
        relationships.expect_patients_of().returning(|_| Ok(vec![]));

        let portal = portal(
            directory_users(),
            MockDoctorProfileRepository::new(),
            relationships,
        );

        assert!(portal.patients_of(1).await.unwrap().is_empty());
    }
}
