//! Migration: Create health_data table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HealthData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HealthData::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HealthData::UserId).integer().not_null())
                    .col(ColumnDef::new(HealthData::Weight).double().not_null())
                    .col(ColumnDef::new(HealthData::Height).double().not_null())
                    .col(ColumnDef::new(HealthData::Steps).integer().not_null())
                    .col(ColumnDef::new(HealthData::HeartRate).integer().not_null())
                    .col(ColumnDef::new(HealthData::Date).date().not_null())
                    .to_owned(),
            )
            .await?;

        // Per-user lookups and "latest record" ordering
        manager
            .create_index(
                Index::create()
                    .name("idx_health_data_user_date")
                    .table(HealthData::Table)
                    .col(HealthData::UserId)
                    .col(HealthData::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HealthData::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum HealthData {
    Table,
    Id,
    UserId,
    Weight,
    Height,
    Steps,
    HeartRate,
    Date,
}
