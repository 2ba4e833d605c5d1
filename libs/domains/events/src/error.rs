use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, Errors, ErrorsResource};
use sea_orm::DbErr;
use thiserror::Error;

use crate::links::INDEX_PATH;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found: {0}")]
    NotFound(i32),

    /// The payload could not be decoded or failed field constraints
    #[error("Invalid payload: {0}")]
    Binding(Errors),

    /// The payload broke a business rule
    #[error("Invalid event: {0}")]
    Validation(Errors),

    #[error("Unknown sort property: {0}")]
    InvalidSort(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type EventResult<T> = Result<T, EventError>;

impl From<DbErr> for EventError {
    fn from(err: DbErr) -> Self {
        EventError::Internal(format!("Database error: {}", err))
    }
}

/// Convert EventError to AppError for standardized error responses
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound(id) => AppError::NotFound(format!("Event with id {} not found", id)),
            EventError::Binding(errors) | EventError::Validation(errors) => {
                AppError::BadRequest(errors.to_string())
            }
            EventError::InvalidSort(property) => {
                AppError::InvalidQuery(format!("Unknown sort property: {}", property))
            }
            EventError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        match self {
            // Payload errors keep their per-field detail and link back to the index
            EventError::Binding(errors) | EventError::Validation(errors) => {
                ErrorsResource::new(errors, INDEX_PATH).into_response()
            }
            other => AppError::from(other).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_helpers::ErrorCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: AppError = EventError::NotFound(7).into();
        assert_eq!(err.status_and_code(), (StatusCode::NOT_FOUND, ErrorCode::NotFound));
        assert_eq!(err.to_string(), "Not Found: Event with id 7 not found");
    }

    #[test]
    fn test_invalid_sort_maps_to_bad_request() {
        let err: AppError = EventError::InvalidSort("color".into()).into();
        assert_eq!(err.status_and_code(), (StatusCode::BAD_REQUEST, ErrorCode::InvalidQuery));
    }

    #[test]
    fn test_db_error_is_internal() {
        let err: EventError = DbErr::Custom("boom".into()).into();
        assert!(matches!(err, EventError::Internal(_)));
    }

    #[test]
    fn test_validation_error_response_is_bad_request() {
        let mut errors = Errors::new("eventDto");
        errors.reject("wrongPrices", "Values of prices are wrong");

        let response = EventError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
