use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a request payload fails field validation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationErrorDto {
    /// One entry per violated constraint
    pub error: Vec<FieldErrorDto>,
}

/// A single field-level validation failure
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldErrorDto {
    /// Path of the offending field in the request payload
    pub field: String,
    /// Human-readable constraint message
    pub message: String,
}

/// The response for operations that report success without returning a row
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}
