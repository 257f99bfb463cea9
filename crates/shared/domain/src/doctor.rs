//! Doctor view and doctor-patient association types.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Professional details stored alongside a doctor account.
///
/// Either field may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub user_id: i32,
    pub medical_license_number: Option<String>,
    pub specialization: Option<String>,
}

/// A user with the doctor flag plus their stored profile
#[derive(Debug, Clone, Serialize)]
pub struct Doctor {
    #[serde(flatten)]
    pub user: User,
    pub medical_license_number: Option<String>,
    pub specialization: Option<String>,
}

impl Doctor {
    /// Combine a doctor account with its optional profile row
    pub fn new(user: User, profile: Option<DoctorProfile>) -> Self {
        let profile = profile.unwrap_or_default();
        Self {
            user,
            medical_license_number: profile.medical_license_number,
            specialization: profile.specialization,
        }
    }
}

/// One directed doctor -> patient edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareLink {
    pub id: i32,
    pub doctor_id: i32,
    pub patient_id: i32,
}
