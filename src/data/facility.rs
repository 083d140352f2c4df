use entity::facility::FacilityStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

#[derive(Debug, Default)]
pub struct FacilityPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<FacilityStatus>,
}

pub struct FacilityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FacilityRepository<'a, C> {
    /// Creates a new instance of [`FacilityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::facility::Model>, DbErr> {
        entity::prelude::Facility::find().all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        facility_id: i32,
    ) -> Result<Option<entity::facility::Model>, DbErr> {
        entity::prelude::Facility::find_by_id(facility_id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        name: String,
        description: String,
        status: FacilityStatus,
    ) -> Result<entity::facility::Model, DbErr> {
        let facility = entity::facility::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            status: ActiveValue::Set(status),
            ..Default::default()
        };

        facility.insert(self.db).await
    }

    pub async fn update(
        &self,
        facility_id: i32,
        patch: FacilityPatch,
    ) -> Result<Option<entity::facility::Model>, DbErr> {
        let facility = match entity::prelude::Facility::find_by_id(facility_id)
            .one(self.db)
            .await?
        {
            Some(facility) => facility,
            None => return Ok(None),
        };

        let mut facility_am = facility.into_active_model();
        if let Some(name) = patch.name {
            facility_am.name = ActiveValue::Set(name);
        }
        if let Some(description) = patch.description {
            facility_am.description = ActiveValue::Set(description);
        }
        if let Some(status) = patch.status {
            facility_am.status = ActiveValue::Set(status);
        }

        let facility = facility_am.update(self.db).await?;

        Ok(Some(facility))
    }

    pub async fn delete(&self, facility_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Facility::delete_by_id(facility_id)
            .exec(self.db)
            .await
    }
}
