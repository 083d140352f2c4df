use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub facility_id: i32,
    pub user_id: i32,
}

impl From<entity::reservation::Model> for ReservationDto {
    fn from(reservation: entity::reservation::Model) -> Self {
        Self {
            id: reservation.id,
            date: reservation.date,
            facility_id: reservation.facility_id,
            user_id: reservation.user_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub date: DateTime<Utc>,
    #[validate(range(min = 1, message = "Facility ID is required"))]
    pub facility_id: i32,
    #[validate(range(min = 1, message = "User ID is required"))]
    pub user_id: i32,
}

#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    pub date: Option<DateTime<Utc>>,
    pub facility_id: Option<i32>,
    pub user_id: Option<i32>,
}
