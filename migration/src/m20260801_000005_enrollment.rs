use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000001_user::User, m20260801_000003_event::Event};

static FK_ENROLLMENT_EVENT_ID: &str = "fk_enrollment_event_id";
static FK_ENROLLMENT_USER_ID: &str = "fk_enrollment_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollment::Id))
                    .col(string(Enrollment::Name))
                    .col(integer(Enrollment::Age))
                    .col(string(Enrollment::Church))
                    .col(string_null(Enrollment::Email))
                    .col(integer(Enrollment::EventId))
                    .col(integer_null(Enrollment::UserId))
                    .col(string_len(Enrollment::EnrollmentType, 8))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENROLLMENT_EVENT_ID)
                    .from_tbl(Enrollment::Table)
                    .from_col(Enrollment::EventId)
                    .to_tbl(Event::Table)
                    .to_col(Event::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENROLLMENT_USER_ID)
                    .from_tbl(Enrollment::Table)
                    .from_col(Enrollment::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ENROLLMENT_USER_ID)
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ENROLLMENT_EVENT_ID)
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Enrollment {
    Table,
    Id,
    Name,
    Age,
    Church,
    Email,
    EventId,
    UserId,
    EnrollmentType,
}
