//! Error types for the Narthex server application.
//!
//! All errors implement `IntoResponse` for Axum HTTP responses and use `thiserror`
//! for ergonomic error definitions. Handlers catch every store/runtime failure and
//! map it to one of the statuses in the API contract; nothing propagates unhandled
//! to the transport layer, and no operation is retried.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError},
    model::api::{ErrorDto, FieldErrorDto, ValidationErrorDto},
};

/// Main error type for the Narthex server application.
///
/// Aggregates all domain-specific error types and external library errors into a
/// single unified error type. The `IntoResponse` implementation maps errors to the
/// HTTP statuses of the API contract:
///
/// - 400 Bad Request - validation failures, duplicate/conflicting rows, bad credentials
/// - 404 Not Found - operations addressing a row that does not exist
/// - 500 Internal Server Error - any other persistence or runtime failure
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (password verification, login).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request payload failed one or more field constraints.
    #[error("Request payload failed validation")]
    ValidationError(Vec<FieldErrorDto>),
    /// Request body could not be deserialized into the expected shape.
    #[error("Malformed request body: {0}")]
    BadRequest(String),
    /// The addressed row does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// The request conflicts with existing data (e.g. duplicate user email).
    #[error("{0}")]
    Conflict(String),
    /// JWT encoding error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Internal error indicating a bug in Narthex's code.
    #[error("Internal error with Narthex's code, this indicates a bug: {0:?}")]
    InternalError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto { error: errors }),
            )
                .into_response(),
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            Self::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{resource} not found"),
                }),
            )
                .into_response(),
            Self::Conflict(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            Self::DbErr(err) => match err.sql_err() {
                // Constraint violations are client errors: duplicate unique values
                // or references to rows that do not exist.
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "A row with a conflicting unique value already exists".to_string(),
                    }),
                )
                    .into_response(),
                Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_)) => (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "A referenced row does not exist".to_string(),
                    }),
                )
                    .into_response(),
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error
/// response.
///
/// Logs the full error message for debugging but returns a generic message to the
/// client to avoid exposing internal detail.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
