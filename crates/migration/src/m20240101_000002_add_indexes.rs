//! Indexes for the `student` table.
//!
//! The unique `(class, roll_no)` index is the authoritative guard for roll
//! number uniqueness; the service-level pre-check only exists to return a
//! friendly error before the constraint fires.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Composite unique (class, roll_no), across active and inactive rows
        manager
            .create_index(
                Index::create()
                    .name("uniq_student_class_roll")
                    .table(Student::Table)
                    .col(Student::Class)
                    .col(Student::RollNo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Active-only listing filters on status
        manager
            .create_index(
                Index::create()
                    .name("idx_student_status")
                    .table(Student::Table)
                    .col(Student::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_student_status").table(Student::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_student_class_roll").table(Student::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Student { Table, Class, RollNo, Status }
