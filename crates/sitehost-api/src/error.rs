//! Maps domain `AppError` to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

use sitehost_core::error::{AppError, ErrorKind};

/// Where unauthenticated browsers are sent.
pub const LOGIN_PAGE: &str = "/login.html";

/// HTTP-facing wrapper around [`AppError`].
///
/// Every failure is answered here; nothing propagates past a handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, body) = match err.kind {
            ErrorKind::Unauthenticated => return Redirect::to(LOGIN_PAGE).into_response(),
            ErrorKind::InvalidCredentials => (StatusCode::UNAUTHORIZED, err.message),
            ErrorKind::Forbidden => (StatusCode::FORBIDDEN, err.message),
            ErrorKind::Conflict => (StatusCode::CONFLICT, err.message),
            ErrorKind::Validation | ErrorKind::NoFileProvided => {
                (StatusCode::BAD_REQUEST, err.message)
            }
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ErrorKind::Storage
            | ErrorKind::Serialization
            | ErrorKind::Configuration
            | ErrorKind::Internal => {
                tracing::error!(
                    kind = %err.kind,
                    error = %err,
                    source = ?err.source.as_ref().map(ToString::to_string),
                    "Request failed"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, body).into_response()
    }
}
