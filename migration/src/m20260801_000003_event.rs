use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000002_facility::Facility;

static FK_EVENT_FACILITY_ID: &str = "fk_event_facility_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Title))
                    .col(string(Event::Description))
                    .col(timestamp_with_time_zone(Event::Date))
                    .col(timestamp_with_time_zone(Event::RegistrationDeadline))
                    .col(integer(Event::FacilityId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_FACILITY_ID)
                    .from_tbl(Event::Table)
                    .from_col(Event::FacilityId)
                    .to_tbl(Facility::Table)
                    .to_col(Facility::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVENT_FACILITY_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Description,
    Date,
    RegistrationDeadline,
    FacilityId,
}
