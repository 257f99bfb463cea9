//! Migration: Create medicine_reminders table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedicineReminders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MedicineReminders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MedicineReminders::UserId).integer().not_null())
                    .col(ColumnDef::new(MedicineReminders::MedicineName).string().not_null())
                    .col(ColumnDef::new(MedicineReminders::Dosage).string().not_null())
                    .col(ColumnDef::new(MedicineReminders::Schedule).string().not_null())
                    .col(ColumnDef::new(MedicineReminders::StartDate).date().not_null())
                    .col(ColumnDef::new(MedicineReminders::EndDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_medicine_reminders_user_id")
                    .table(MedicineReminders::Table)
                    .col(MedicineReminders::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MedicineReminders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MedicineReminders {
    Table,
    Id,
    UserId,
    MedicineName,
    Dosage,
    Schedule,
    StartDate,
    EndDate,
}
