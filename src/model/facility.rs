use entity::facility::FacilityStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilityDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String)]
    pub status: FacilityStatus,
}

impl From<entity::facility::Model> for FacilityDto {
    fn from(facility: entity::facility::Model) -> Self {
        Self {
            id: facility.id,
            name: facility.name,
            description: facility.description,
            status: facility.status,
        }
    }
}

#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacilityRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: String,
    #[schema(value_type = String)]
    pub status: FacilityStatus,
}

#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFacilityRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<FacilityStatus>,
}
