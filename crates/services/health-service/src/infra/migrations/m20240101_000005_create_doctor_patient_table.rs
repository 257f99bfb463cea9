//! Migration: Create doctor_patient edge table.
//!
//! Edges are not unique and carry no foreign keys; duplicate links are legal.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DoctorPatient::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DoctorPatient::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DoctorPatient::DoctorId).integer().not_null())
                    .col(ColumnDef::new(DoctorPatient::PatientId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_doctor_patient_doctor_id")
                    .table(DoctorPatient::Table)
                    .col(DoctorPatient::DoctorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_doctor_patient_patient_id")
                    .table(DoctorPatient::Table)
                    .col(DoctorPatient::PatientId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DoctorPatient::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DoctorPatient {
    Table,
    Id,
    DoctorId,
    PatientId,
}
