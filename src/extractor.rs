//! Validated JSON extractor.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{error::Error, model::api::FieldErrorDto};

/// JSON extractor that deserializes the payload and runs its `validator`
/// constraints before the handler sees it.
///
/// Deserialization failures (missing field, wrong type, unknown enum value)
/// reject with a 400 and the deserializer's message. Constraint failures reject
/// with a 400 carrying the full field-error list, one entry per violated
/// constraint. The extractor never touches the store.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| Error::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| Error::ValidationError(collect_field_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

fn collect_field_errors(errors: &validator::ValidationErrors) -> Vec<FieldErrorDto> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| FieldErrorDto {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string()),
            })
        })
        .collect()
}
