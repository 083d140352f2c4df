use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::{facility::FacilityPatch, FacilityRepository},
    error::Error,
    extractor::ValidatedJson,
    model::{
        api::{ErrorDto, ValidationErrorDto},
        app::AppState,
        facility::{CreateFacilityRequest, FacilityDto, UpdateFacilityRequest},
    },
};

pub static FACILITY_TAG: &str = "facility";

/// List all facilities
#[utoipa::path(
    get,
    path = "/facilities",
    tag = FACILITY_TAG,
    responses(
        (status = 200, description = "All facilities", body = Vec<FacilityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_facilities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let facilities = FacilityRepository::new(&state.db).get_all().await?;

    let facility_dtos: Vec<FacilityDto> = facilities.into_iter().map(FacilityDto::from).collect();

    Ok((StatusCode::OK, Json(facility_dtos)))
}

/// Get a single facility by ID
#[utoipa::path(
    get,
    path = "/facilities/{id}",
    tag = FACILITY_TAG,
    params(("id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 200, description = "Facility found", body = FacilityDto),
        (status = 404, description = "Facility not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_facility_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let facility = FacilityRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(Error::NotFound("Facility"))?;

    Ok((StatusCode::OK, Json(FacilityDto::from(facility))))
}

/// Create a new facility
#[utoipa::path(
    post,
    path = "/facilities",
    tag = FACILITY_TAG,
    request_body = CreateFacilityRequest,
    responses(
        (status = 201, description = "Facility created", body = FacilityDto),
        (status = 400, description = "Validation failure", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_facility(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateFacilityRequest>,
) -> Result<impl IntoResponse, Error> {
    let facility = FacilityRepository::new(&state.db)
        .create(request.name, request.description, request.status)
        .await?;

    Ok((StatusCode::CREATED, Json(FacilityDto::from(facility))))
}

/// Update a facility, merging provided fields onto the existing row
#[utoipa::path(
    put,
    path = "/facilities/{id}",
    tag = FACILITY_TAG,
    params(("id" = i32, Path, description = "Facility ID")),
    request_body = UpdateFacilityRequest,
    responses(
        (status = 200, description = "Facility updated", body = FacilityDto),
        (status = 400, description = "Validation failure", body = ValidationErrorDto),
        (status = 404, description = "Facility not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_facility(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateFacilityRequest>,
) -> Result<impl IntoResponse, Error> {
    let facility = FacilityRepository::new(&state.db)
        .update(
            id,
            FacilityPatch {
                name: request.name,
                description: request.description,
                status: request.status,
            },
        )
        .await?
        .ok_or(Error::NotFound("Facility"))?;

    Ok((StatusCode::OK, Json(FacilityDto::from(facility))))
}

/// Delete a facility
#[utoipa::path(
    delete,
    path = "/facilities/{id}",
    tag = FACILITY_TAG,
    params(("id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 204, description = "Facility deleted"),
        (status = 400, description = "Facility still referenced by events or reservations", body = ErrorDto),
        (status = 404, description = "Facility not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_facility(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let result = FacilityRepository::new(&state.db).delete(id).await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound("Facility"));
    }

    Ok(StatusCode::NO_CONTENT)
}
