use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::{reservation::ReservationPatch, ReservationRepository},
    error::Error,
    extractor::ValidatedJson,
    model::{
        api::{ErrorDto, ValidationErrorDto},
        app::AppState,
        reservation::{CreateReservationRequest, ReservationDto, UpdateReservationRequest},
    },
};

pub static RESERVATION_TAG: &str = "reservation";

/// List all reservations
#[utoipa::path(
    get,
    path = "/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations", body = Vec<ReservationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let reservations = ReservationRepository::new(&state.db).get_all().await?;

    let reservation_dtos: Vec<ReservationDto> =
        reservations.into_iter().map(ReservationDto::from).collect();

    Ok((StatusCode::OK, Json(reservation_dtos)))
}

/// Get a single reservation by ID
#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation found", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reservation = ReservationRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(Error::NotFound("Reservation"))?;

    Ok((StatusCode::OK, Json(ReservationDto::from(reservation))))
}

/// Create a new reservation
#[utoipa::path(
    post,
    path = "/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Validation failure or unknown facility/user", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> Result<impl IntoResponse, Error> {
    let reservation = ReservationRepository::new(&state.db)
        .create(request.date, request.facility_id, request.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ReservationDto::from(reservation))))
}

/// Update a reservation, merging provided fields onto the existing row
#[utoipa::path(
    put,
    path = "/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = UpdateReservationRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationDto),
        (status = 400, description = "Validation failure or unknown facility/user", body = ValidationErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateReservationRequest>,
) -> Result<impl IntoResponse, Error> {
    let reservation = ReservationRepository::new(&state.db)
        .update(
            id,
            ReservationPatch {
                date: request.date,
                facility_id: request.facility_id,
                user_id: request.user_id,
            },
        )
        .await?
        .ok_or(Error::NotFound("Reservation"))?;

    Ok((StatusCode::OK, Json(ReservationDto::from(reservation))))
}

/// Delete a reservation
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let result = ReservationRepository::new(&state.db).delete(id).await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound("Reservation"));
    }

    Ok(StatusCode::NO_CONTENT)
}
