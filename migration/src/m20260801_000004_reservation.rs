use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000001_user::User, m20260801_000002_facility::Facility};

static FK_RESERVATION_FACILITY_ID: &str = "fk_reservation_facility_id";
static FK_RESERVATION_USER_ID: &str = "fk_reservation_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(timestamp_with_time_zone(Reservation::Date))
                    .col(integer(Reservation::FacilityId))
                    .col(integer(Reservation::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESERVATION_FACILITY_ID)
                    .from_tbl(Reservation::Table)
                    .from_col(Reservation::FacilityId)
                    .to_tbl(Facility::Table)
                    .to_col(Facility::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESERVATION_USER_ID)
                    .from_tbl(Reservation::Table)
                    .from_col(Reservation::UserId)
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
                    .name(FK_RESERVATION_USER_ID)
                    .table(Reservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RESERVATION_FACILITY_ID)
                    .table(Reservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    Date,
    FacilityId,
    UserId,
}
