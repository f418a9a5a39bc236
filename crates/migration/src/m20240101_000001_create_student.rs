//! Create `student` table.
//!
//! The registration number is the natural primary key; `status` carries the
//! soft-delete flag (false = inactive).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(string_len(Student::RegistrationNumber, 64).primary_key())
                    .col(string_len(Student::Name, 128).not_null())
                    .col(string_len(Student::Class, 32).not_null())
                    .col(integer(Student::RollNo).not_null())
                    .col(string_len(Student::ContactNumber, 32).not_null())
                    .col(boolean(Student::Status).not_null().default(true))
                    .col(timestamp_with_time_zone(Student::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Student::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Student::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Student { Table, RegistrationNumber, Name, Class, RollNo, ContactNumber, Status, CreatedAt, UpdatedAt }
