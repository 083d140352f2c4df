use entity::enrollment::EnrollmentType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

pub struct NewEnrollment {
    pub name: String,
    pub age: i32,
    pub church: String,
    pub email: Option<String>,
    pub event_id: i32,
    pub user_id: Option<i32>,
    pub enrollment_type: EnrollmentType,
}

/// An explicit `enrollment_type` in a patch is applied as-is; the free-quota
/// rule is not re-validated on update.
#[derive(Debug, Default)]
pub struct EnrollmentPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub church: Option<String>,
    pub email: Option<String>,
    pub event_id: Option<i32>,
    pub user_id: Option<i32>,
    pub enrollment_type: Option<EnrollmentType>,
}

pub struct EnrollmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    /// Creates a new instance of [`EnrollmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find().all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find_by_id(enrollment_id)
            .one(self.db)
            .await
    }

    /// Counts existing FREE enrollments held by a user for an event. Used by the
    /// eligibility rule against the same transaction that performs the insert.
    pub async fn count_free_for_user_event(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<u64, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .filter(entity::enrollment::Column::EventId.eq(event_id))
            .filter(entity::enrollment::Column::EnrollmentType.eq(EnrollmentType::Free))
            .count(self.db)
            .await
    }

    pub async fn create(
        &self,
        new_enrollment: NewEnrollment,
    ) -> Result<entity::enrollment::Model, DbErr> {
        let enrollment = entity::enrollment::ActiveModel {
            name: ActiveValue::Set(new_enrollment.name),
            age: ActiveValue::Set(new_enrollment.age),
            church: ActiveValue::Set(new_enrollment.church),
            email: ActiveValue::Set(new_enrollment.email),
            event_id: ActiveValue::Set(new_enrollment.event_id),
            user_id: ActiveValue::Set(new_enrollment.user_id),
            enrollment_type: ActiveValue::Set(new_enrollment.enrollment_type),
            ..Default::default()
        };

        enrollment.insert(self.db).await
    }

    pub async fn update(
        &self,
        enrollment_id: i32,
        patch: EnrollmentPatch,
    ) -> Result<Option<entity::enrollment::Model>, DbErr> {
        let enrollment = match entity::prelude::Enrollment::find_by_id(enrollment_id)
            .one(self.db)
            .await?
        {
            Some(enrollment) => enrollment,
            None => return Ok(None),
        };

        let mut enrollment_am = enrollment.into_active_model();
        if let Some(name) = patch.name {
            enrollment_am.name = ActiveValue::Set(name);
        }
        if let Some(age) = patch.age {
            enrollment_am.age = ActiveValue::Set(age);
        }
        if let Some(church) = patch.church {
            enrollment_am.church = ActiveValue::Set(church);
        }
        if let Some(email) = patch.email {
            enrollment_am.email = ActiveValue::Set(Some(email));
        }
        if let Some(event_id) = patch.event_id {
            enrollment_am.event_id = ActiveValue::Set(event_id);
        }
        if let Some(user_id) = patch.user_id {
            enrollment_am.user_id = ActiveValue::Set(Some(user_id));
        }
        if let Some(enrollment_type) = patch.enrollment_type {
            enrollment_am.enrollment_type = ActiveValue::Set(enrollment_type);
        }

        let enrollment = enrollment_am.update(self.db).await?;

        Ok(Some(enrollment))
    }

    pub async fn delete(&self, enrollment_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Enrollment::delete_by_id(enrollment_id)
            .exec(self.db)
            .await
    }
}
