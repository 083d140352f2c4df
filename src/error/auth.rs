use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Current password provided for user ID {0} does not match the stored hash")]
    IncorrectCurrentPassword(i32),
    #[error("Login failed for the provided credentials")]
    InvalidCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::IncorrectCurrentPassword(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Incorrect current password".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", Self::InvalidCredentials);

                // Same response whether the email or the password was wrong
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Invalid email or password".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
