//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations, which
//! are collected into a single OpenAPI document. Swagger UI serves the document
//! interactively at `/api/docs` and the raw spec at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// Each resource exposes list, fetch, create, update, and delete endpoints;
/// users additionally expose a password change route and auth exposes login.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Narthex", description = "Narthex API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "User management API routes"),
        (name = controller::facility::FACILITY_TAG, description = "Facility management API routes"),
        (name = controller::event::EVENT_TAG, description = "Event management API routes"),
        (name = controller::reservation::RESERVATION_TAG, description = "Reservation management API routes"),
        (name = controller::enrollment::ENROLLMENT_TAG, description = "Enrollment management API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::user::get_all_users))
        .routes(routes!(controller::user::get_user_by_id))
        .routes(routes!(controller::user::create_user))
        .routes(routes!(controller::user::update_user))
        .routes(routes!(controller::user::update_password))
        .routes(routes!(controller::user::delete_user))
        .routes(routes!(controller::facility::get_all_facilities))
        .routes(routes!(controller::facility::get_facility_by_id))
        .routes(routes!(controller::facility::create_facility))
        .routes(routes!(controller::facility::update_facility))
        .routes(routes!(controller::facility::delete_facility))
        .routes(routes!(controller::event::get_all_events))
        .routes(routes!(controller::event::get_event_by_id))
        .routes(routes!(controller::event::create_event))
        .routes(routes!(controller::event::update_event))
        .routes(routes!(controller::event::delete_event))
        .routes(routes!(controller::reservation::get_all_reservations))
        .routes(routes!(controller::reservation::get_reservation_by_id))
        .routes(routes!(controller::reservation::create_reservation))
        .routes(routes!(controller::reservation::update_reservation))
        .routes(routes!(controller::reservation::delete_reservation))
        .routes(routes!(controller::enrollment::get_all_enrollments))
        .routes(routes!(controller::enrollment::get_enrollment_by_id))
        .routes(routes!(controller::enrollment::create_enrollment))
        .routes(routes!(controller::enrollment::update_enrollment))
        .routes(routes!(controller::enrollment::delete_enrollment))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
