use entity::enrollment::EnrollmentType;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn enrollment(&self) -> EnrollmentFixtures<'_> {
        EnrollmentFixtures { setup: self }
    }
}

pub struct EnrollmentFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> EnrollmentFixtures<'a> {
    pub async fn insert_enrollment(
        &self,
        event_id: i32,
        user_id: Option<i32>,
        enrollment_type: EnrollmentType,
    ) -> Result<entity::enrollment::Model, TestError> {
        Ok(
            entity::prelude::Enrollment::insert(entity::enrollment::ActiveModel {
                name: ActiveValue::Set("Test Attendee".to_string()),
                age: ActiveValue::Set(12),
                church: ActiveValue::Set("First Church".to_string()),
                email: ActiveValue::Set(None),
                event_id: ActiveValue::Set(event_id),
                user_id: ActiveValue::Set(user_id),
                enrollment_type: ActiveValue::Set(enrollment_type),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
