use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub registration_deadline: DateTime<Utc>,
    pub facility_id: i32,
}

#[derive(Debug, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub facility_id: Option<i32>,
}

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find().all(self.db).await
    }

    pub async fn get_by_id(&self, event_id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(event_id).one(self.db).await
    }

    pub async fn create(&self, new_event: NewEvent) -> Result<entity::event::Model, DbErr> {
        let event = entity::event::ActiveModel {
            title: ActiveValue::Set(new_event.title),
            description: ActiveValue::Set(new_event.description),
            date: ActiveValue::Set(new_event.date),
            registration_deadline: ActiveValue::Set(new_event.registration_deadline),
            facility_id: ActiveValue::Set(new_event.facility_id),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn update(
        &self,
        event_id: i32,
        patch: EventPatch,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        let event = match entity::prelude::Event::find_by_id(event_id).one(self.db).await? {
            Some(event) => event,
            None => return Ok(None),
        };

        let mut event_am = event.into_active_model();
        if let Some(title) = patch.title {
            event_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = patch.description {
            event_am.description = ActiveValue::Set(description);
        }
        if let Some(date) = patch.date {
            event_am.date = ActiveValue::Set(date);
        }
        if let Some(registration_deadline) = patch.registration_deadline {
            event_am.registration_deadline = ActiveValue::Set(registration_deadline);
        }
        if let Some(facility_id) = patch.facility_id {
            event_am.facility_id = ActiveValue::Set(facility_id);
        }

        let event = event_am.update(self.db).await?;

        Ok(Some(event))
    }

    pub async fn delete(&self, event_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Event::delete_by_id(event_id)
            .exec(self.db)
            .await
    }
}
