//! Health record database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::HealthRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "health_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub weight: f64,
    pub height: f64,
    pub steps: i32,
    pub heart_rate: i32,
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HealthRecord {
    fn from(model: Model) -> Self {
        HealthRecord {
            id: model.id,
            user_id: model.user_id,
            weight: model.weight,
            height: model.height,
            steps: model.steps,
            heart_rate: model.heart_rate,
            date: model.date,
        }
    }
}
