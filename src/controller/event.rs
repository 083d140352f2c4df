use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::{
        event::{EventPatch, NewEvent},
        EventRepository,
    },
    error::Error,
    extractor::ValidatedJson,
    model::{
        api::{ErrorDto, ValidationErrorDto},
        app::AppState,
        event::{CreateEventRequest, EventDto, UpdateEventRequest},
    },
};

pub static EVENT_TAG: &str = "event";

/// List all events
#[utoipa::path(
    get,
    path = "/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_events(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let events = EventRepository::new(&state.db).get_all().await?;

    let event_dtos: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();

    Ok((StatusCode::OK, Json(event_dtos)))
}

/// Get a single event by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event found", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let event = EventRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(Error::NotFound("Event"))?;

    Ok((StatusCode::OK, Json(EventDto::from(event))))
}

/// Create a new event
#[utoipa::path(
    post,
    path = "/events",
    tag = EVENT_TAG,
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Validation failure or unknown facility", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> Result<impl IntoResponse, Error> {
    let event = EventRepository::new(&state.db)
        .create(NewEvent {
            title: request.title,
            description: request.description,
            date: request.date,
            registration_deadline: request.registration_deadline,
            facility_id: request.facility_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(EventDto::from(event))))
}

/// Update an event, merging provided fields onto the existing row
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Validation failure or unknown facility", body = ValidationErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateEventRequest>,
) -> Result<impl IntoResponse, Error> {
    let event = EventRepository::new(&state.db)
        .update(
            id,
            EventPatch {
                title: request.title,
                description: request.description,
                date: request.date,
                registration_deadline: request.registration_deadline,
                facility_id: request.facility_id,
            },
        )
        .await?
        .ok_or(Error::NotFound("Event"))?;

    Ok((StatusCode::OK, Json(EventDto::from(event))))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 400, description = "Event still referenced by enrollments", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let result = EventRepository::new(&state.db).delete(id).await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound("Event"));
    }

    Ok(StatusCode::NO_CONTENT)
}
