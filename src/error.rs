use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::constants::{
    DUPLICATE_EMAIL_MESSAGE, FIELD_TOO_LONG_MESSAGE, REQUIRED_FIELDS_MESSAGE,
};
use crate::store::StoreError;

/// Any possible server errors
#[derive(Debug, Error)]
pub(crate) enum ServiceError {
    #[error(transparent)]
    ValidationError(#[from] ValidationErrors),

    #[error(transparent)]
    AxumJsonRejection(#[from] JsonRejection),

    #[error(transparent)]
    StoreError(#[from] StoreError),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServiceError::ValidationError(ref errors) if !has_missing_field(errors) => {
                tracing::debug!("Rejected request input: {}", self);
                (StatusCode::BAD_REQUEST, FIELD_TOO_LONG_MESSAGE.to_owned())
            }
            ServiceError::ValidationError(_) | ServiceError::AxumJsonRejection(_) => {
                tracing::debug!("Rejected request input: {}", self);
                (StatusCode::BAD_REQUEST, REQUIRED_FIELDS_MESSAGE.to_owned())
            }
            ServiceError::StoreError(StoreError::DuplicateKey(ref detail)) => {
                tracing::debug!("Duplicate key: {}", detail);
                (StatusCode::CONFLICT, DUPLICATE_EMAIL_MESSAGE.to_owned())
            }
            ServiceError::StoreError(e) => {
                tracing::error!("Store error occurred: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Whether any failed field was left empty, as opposed to only being too long.
fn has_missing_field(errors: &ValidationErrors) -> bool {
    let fields = errors.field_errors();
    fields.values().flat_map(|field| field.iter()).any(|e| {
        e.params
            .get("value")
            .and_then(|v| v.as_str())
            .map_or(true, str::is_empty)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_is_conflict() {
        let response =
            ServiceError::from(StoreError::DuplicateKey("users_email_key".into())).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn unreachable_store_is_internal_error() {
        let response =
            ServiceError::from(StoreError::Unreachable("timed out".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
