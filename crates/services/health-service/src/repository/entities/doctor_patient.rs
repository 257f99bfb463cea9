//! Doctor -> patient edge entity for SeaORM.
//!
//! Both endpoints reference `users.id`; the relations exist for joins only,
//! the table itself carries no foreign keys.

use sea_orm::entity::prelude::*;

use domain::CareLink;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doctor_patient")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub doctor_id: i32,
    pub patient_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::DoctorId",
        to = "super::user::Column::Id"
    )]
    Doctor,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PatientId",
        to = "super::user::Column::Id"
    )]
    Patient,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CareLink {
    fn from(model: Model) -> Self {
        CareLink {
            id: model.id,
            doctor_id: model.doctor_id,
            patient_id: model.patient_id,
        }
    }
}
