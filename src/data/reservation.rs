use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

#[derive(Debug, Default)]
pub struct ReservationPatch {
    pub date: Option<DateTime<Utc>>,
    pub facility_id: Option<i32>,
    pub user_id: Option<i32>,
}

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    /// Creates a new instance of [`ReservationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find().all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        reservation_id: i32,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(reservation_id)
            .one(self.db)
            .await
    }

    /// Creates a reservation. Overlapping reservations for the same facility and
    /// date are accepted; no double-booking policy is enforced.
    pub async fn create(
        &self,
        date: DateTime<Utc>,
        facility_id: i32,
        user_id: i32,
    ) -> Result<entity::reservation::Model, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            date: ActiveValue::Set(date),
            facility_id: ActiveValue::Set(facility_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        reservation.insert(self.db).await
    }

    pub async fn update(
        &self,
        reservation_id: i32,
        patch: ReservationPatch,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        let reservation = match entity::prelude::Reservation::find_by_id(reservation_id)
            .one(self.db)
            .await?
        {
            Some(reservation) => reservation,
            None => return Ok(None),
        };

        let mut reservation_am = reservation.into_active_model();
        if let Some(date) = patch.date {
            reservation_am.date = ActiveValue::Set(date);
        }
        if let Some(facility_id) = patch.facility_id {
            reservation_am.facility_id = ActiveValue::Set(facility_id);
        }
        if let Some(user_id) = patch.user_id {
            reservation_am.user_id = ActiveValue::Set(user_id);
        }

        let reservation = reservation_am.update(self.db).await?;

        Ok(Some(reservation))
    }

    pub async fn delete(&self, reservation_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Reservation::delete_by_id(reservation_id)
            .exec(self.db)
            .await
    }
}
