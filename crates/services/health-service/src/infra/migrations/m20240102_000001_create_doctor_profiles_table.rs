//! Migration: Create doctor_profiles table for license and specialization.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DoctorProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DoctorProfiles::UserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DoctorProfiles::MedicalLicenseNumber).string().null())
                    .col(ColumnDef::new(DoctorProfiles::Specialization).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DoctorProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DoctorProfiles {
    Table,
    UserId,
    MedicalLicenseNumber,
    Specialization,
}
