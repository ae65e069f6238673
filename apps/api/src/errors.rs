use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::booking::BookingError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

/// Malformed or missing JSON bodies get the same error envelope as everything else.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// `Json` extractor whose rejection is an `AppError`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Booking(e @ BookingError::InvalidRequestSize { .. }) => (
                StatusCode::BAD_REQUEST,
                "INVALID_REQUEST_SIZE",
                e.to_string(),
            ),
            AppError::Booking(e @ BookingError::InsufficientAvailability { .. }) => {
                tracing::warn!("Booking rejected: {e}");
                (
                    StatusCode::CONFLICT,
                    "INSUFFICIENT_AVAILABILITY",
                    e.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_is_bad_request() {
        let response =
            AppError::from(BookingError::InvalidRequestSize { requested: 7 }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_insufficient_availability_is_conflict() {
        let response = AppError::from(BookingError::InsufficientAvailability {
            required: 4,
            available: 1,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_is_bad_request() {
        let response = AppError::Validation("Room 111 is not in the hotel".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_booking_message_passes_through() {
        let err = AppError::from(BookingError::InvalidRequestSize { requested: 0 });
        assert_eq!(err.to_string(), "Can only book 1 to 5 rooms, got 0");
    }
}
