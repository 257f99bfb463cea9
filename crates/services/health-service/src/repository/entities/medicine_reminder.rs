//! Medicine reminder database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::MedicineReminder;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "medicine_reminders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub medicine_name: String,
    pub dosage: String,
    pub schedule: String,
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MedicineReminder {
    fn from(model: Model) -> Self {
        MedicineReminder {
            id: model.id,
            user_id: model.user_id,
            medicine_name: model.medicine_name,
            dosage: model.dosage,
            schedule: model.schedule,
            start_date: model.start_date,
            end_date: model.end_date,
        }
    }
}
