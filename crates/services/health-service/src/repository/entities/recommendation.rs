//! Recommendation database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Recommendation;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recommendations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub recommendation_text: String,
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Recommendation {
    fn from(model: Model) -> Self {
        Recommendation {
            id: model.id,
            user_id: model.user_id,
            text: model.recommendation_text,
            date: model.date,
        }
    }
}
