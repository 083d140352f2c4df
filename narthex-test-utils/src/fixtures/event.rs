use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn event(&self) -> EventFixtures<'_> {
        EventFixtures { setup: self }
    }
}

pub struct EventFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> EventFixtures<'a> {
    /// Inserts an event thirty days out with a registration deadline ten days
    /// before it, hosted at the given facility.
    pub async fn insert_event(&self, facility_id: i32) -> Result<entity::event::Model, TestError> {
        Ok(entity::prelude::Event::insert(entity::event::ActiveModel {
            title: ActiveValue::Set("Summer Camp".to_string()),
            description: ActiveValue::Set("Youth summer camp".to_string()),
            date: ActiveValue::Set(Utc::now() + Duration::days(30)),
            registration_deadline: ActiveValue::Set(Utc::now() + Duration::days(20)),
            facility_id: ActiveValue::Set(facility_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
