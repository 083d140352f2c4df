use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::{enrollment::EnrollmentPatch, EnrollmentRepository},
    error::Error,
    extractor::ValidatedJson,
    model::{
        api::{ErrorDto, ValidationErrorDto},
        app::AppState,
        enrollment::{CreateEnrollmentRequest, EnrollmentDto, UpdateEnrollmentRequest},
    },
    service::enrollment::EnrollmentService,
};

pub static ENROLLMENT_TAG: &str = "enrollment";

/// List all enrollments
#[utoipa::path(
    get,
    path = "/enrollments",
    tag = ENROLLMENT_TAG,
    responses(
        (status = 200, description = "All enrollments", body = Vec<EnrollmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_enrollments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let enrollments = EnrollmentRepository::new(&state.db).get_all().await?;

    let enrollment_dtos: Vec<EnrollmentDto> =
        enrollments.into_iter().map(EnrollmentDto::from).collect();

    Ok((StatusCode::OK, Json(enrollment_dtos)))
}

/// Get a single enrollment by ID
#[utoipa::path(
    get,
    path = "/enrollments/{id}",
    tag = ENROLLMENT_TAG,
    params(("id" = i32, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "Enrollment found", body = EnrollmentDto),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enrollment_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let enrollment = EnrollmentRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(Error::NotFound("Enrollment"))?;

    Ok((StatusCode::OK, Json(EnrollmentDto::from(enrollment))))
}

/// Create a new enrollment; the FREE or PAID type is decided server-side
#[utoipa::path(
    post,
    path = "/enrollments",
    tag = ENROLLMENT_TAG,
    request_body = CreateEnrollmentRequest,
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentDto),
        (status = 400, description = "Validation failure or unknown event/user", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateEnrollmentRequest>,
) -> Result<impl IntoResponse, Error> {
    let enrollment = EnrollmentService::new(&state.db)
        .create_enrollment(request)
        .await?;

    Ok((StatusCode::CREATED, Json(EnrollmentDto::from(enrollment))))
}

/// Update an enrollment, merging provided fields onto the existing row
#[utoipa::path(
    put,
    path = "/enrollments/{id}",
    tag = ENROLLMENT_TAG,
    params(("id" = i32, Path, description = "Enrollment ID")),
    request_body = UpdateEnrollmentRequest,
    responses(
        (status = 200, description = "Enrollment updated", body = EnrollmentDto),
        (status = 400, description = "Validation failure or unknown event/user", body = ValidationErrorDto),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateEnrollmentRequest>,
) -> Result<impl IntoResponse, Error> {
    let enrollment = EnrollmentRepository::new(&state.db)
        .update(
            id,
            EnrollmentPatch {
                name: request.name,
                age: request.age,
                church: request.church,
                email: request.email,
                event_id: request.event_id,
                user_id: request.user_id,
                enrollment_type: request.enrollment_type,
            },
        )
        .await?
        .ok_or(Error::NotFound("Enrollment"))?;

    Ok((StatusCode::OK, Json(EnrollmentDto::from(enrollment))))
}

/// Delete an enrollment
#[utoipa::path(
    delete,
    path = "/enrollments/{id}",
    tag = ENROLLMENT_TAG,
    params(("id" = i32, Path, description = "Enrollment ID")),
    responses(
        (status = 204, description = "Enrollment deleted"),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let result = EnrollmentRepository::new(&state.db).delete(id).await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound("Enrollment"));
    }

    Ok(StatusCode::NO_CONTENT)
}
