use entity::enrollment::EnrollmentType;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub church: String,
    pub email: Option<String>,
    pub event_id: i32,
    pub user_id: Option<i32>,
    #[schema(value_type = String)]
    pub enrollment_type: EnrollmentType,
}

impl From<entity::enrollment::Model> for EnrollmentDto {
    fn from(enrollment: entity::enrollment::Model) -> Self {
        Self {
            id: enrollment.id,
            name: enrollment.name,
            age: enrollment.age,
            church: enrollment.church,
            email: enrollment.email,
            event_id: enrollment.event_id,
            user_id: enrollment.user_id,
            enrollment_type: enrollment.enrollment_type,
        }
    }
}

/// The enrollment type is never accepted at creation; it is decided by the
/// eligibility rule in [`crate::service::enrollment::EnrollmentService`].
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnrollmentRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = 1, message = "Age is required"))]
    pub age: i32,
    #[validate(length(min = 1, message = "Church name is required"))]
    pub church: String,
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,
    #[validate(range(min = 1, message = "Event ID is required"))]
    pub event_id: i32,
    pub user_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnrollmentRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(range(min = 1, message = "Age is required"))]
    pub age: Option<i32>,
    #[validate(length(min = 1, message = "Church name is required"))]
    pub church: Option<String>,
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,
    #[validate(range(min = 1, message = "Event ID is required"))]
    pub event_id: Option<i32>,
    pub user_id: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub enrollment_type: Option<EnrollmentType>,
}
