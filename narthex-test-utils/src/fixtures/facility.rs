use entity::facility::FacilityStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn facility(&self) -> FacilityFixtures<'_> {
        FacilityFixtures { setup: self }
    }
}

pub struct FacilityFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> FacilityFixtures<'a> {
    pub async fn insert_facility(&self) -> Result<entity::facility::Model, TestError> {
        Ok(
            entity::prelude::Facility::insert(entity::facility::ActiveModel {
                name: ActiveValue::Set("Main Hall".to_string()),
                description: ActiveValue::Set("Large hall next to the sanctuary".to_string()),
                status: ActiveValue::Set(FacilityStatus::Available),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
