use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::{user::UserPatch, UserRepository},
    error::Error,
    extractor::ValidatedJson,
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        app::AppState,
        user::{CreateUserRequest, UpdatePasswordRequest, UpdateUserRequest, UserDto},
    },
    service::user::UserService,
};

pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserRepository::new(&state.db).get_all().await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, Json(user_dtos)))
}

/// Get a single user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(Error::NotFound("User"))?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Validation failure or duplicate email", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).create_user(request).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Update a user, merging provided fields onto the existing row
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Validation failure", body = ValidationErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, Error> {
    let user = UserRepository::new(&state.db)
        .update(
            id,
            UserPatch {
                name: request.name,
                email: request.email,
                role: request.role,
                phone: request.phone,
                membership_type: request.membership_type,
            },
        )
        .await?
        .ok_or(Error::NotFound("User"))?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Change a user's password after verifying the current one
#[utoipa::path(
    put,
    path = "/users/{id}/password",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = MessageDto),
        (status = 400, description = "Validation failure or incorrect current password", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdatePasswordRequest>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).update_password(id, request).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password updated successfully".to_string(),
        }),
    ))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let result = UserRepository::new(&state.db).delete(id).await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound("User"));
    }

    Ok(StatusCode::NO_CONTENT)
}
