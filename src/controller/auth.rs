use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    extractor::ValidatedJson,
    model::{
        api::{ErrorDto, ValidationErrorDto},
        app::AppState,
        auth::{LoginRequest, TokenResponse},
    },
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Exchange credentials for an access token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = TokenResponse),
        (status = 400, description = "Validation failure or invalid credentials", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, Error> {
    let token = AuthService::new(&state.db, &state.config)
        .login(request)
        .await?;

    Ok((StatusCode::OK, Json(token)))
}
