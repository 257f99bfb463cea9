//! Doctor profile database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::DoctorProfile;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doctor_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    pub medical_license_number: Option<String>,
    pub specialization: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for DoctorProfile {
    fn from(model: Model) -> Self {
        DoctorProfile {
            user_id: model.user_id,
            medical_license_number: model.medical_license_number,
            specialization: model.specialization,
        }
    }
}
