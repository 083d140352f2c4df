use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn reservation(&self) -> ReservationFixtures<'_> {
        ReservationFixtures { setup: self }
    }
}

pub struct ReservationFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> ReservationFixtures<'a> {
    pub async fn insert_reservation(
        &self,
        facility_id: i32,
        user_id: i32,
    ) -> Result<entity::reservation::Model, TestError> {
        Ok(
            entity::prelude::Reservation::insert(entity::reservation::ActiveModel {
                date: ActiveValue::Set(Utc::now() + Duration::days(3)),
                facility_id: ActiveValue::Set(facility_id),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
