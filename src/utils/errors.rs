//! Application error type and the terminal error handler.
//!
//! Every failure in the request pipeline is represented as an [`AppError`]
//! carrying an HTTP status code and a client-safe message. The
//! [`IntoResponse`] impl is the single place a failure is turned into a
//! response body, so every layer of the API fails with the same JSON shape:
//!
//! ```json
//! { "status": "Fail", "message": "No token, authorization denied" }
//! ```
//!
//! The `status` label is `"Fail"` for 4xx responses and `"Error"` for
//! everything else.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, Clone)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn gateway_timeout(message: impl Into<String>) -> Self {
        Self::new(StatusCode::GATEWAY_TIMEOUT, message)
    }

    /// Wrap a store or I/O failure. The underlying error is logged but the
    /// client only ever sees a generic message.
    pub fn database<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let err = err.into();
        tracing::error!(error = ?err, "database operation failed");
        Self::internal("Internal Server Error")
    }

    /// Short status label for the response body: `Fail` for client errors,
    /// `Error` otherwise.
    pub fn status_label(&self) -> &'static str {
        if self.status.is_client_error() {
            "Fail"
        } else {
            "Error"
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": self.status_label(),
            "message": self.message,
        }));

        (self.status, body).into_response()
    }
}

// Any error that was not explicitly mapped to an AppError reaches the
// client as a generic 500. The original error is logged here and goes no
// further.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        tracing::error!(error = ?err, "unhandled internal error");
        Self::internal("Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_labelled_fail() {
        assert_eq!(AppError::bad_request("nope").status_label(), "Fail");
        assert_eq!(AppError::unauthorized("nope").status_label(), "Fail");
        assert_eq!(AppError::forbidden("nope").status_label(), "Fail");
        assert_eq!(AppError::not_found("nope").status_label(), "Fail");
    }

    #[test]
    fn server_errors_are_labelled_error() {
        assert_eq!(AppError::internal("boom").status_label(), "Error");
        assert_eq!(AppError::gateway_timeout("slow").status_label(), "Error");
    }

    #[test]
    fn unmapped_errors_become_generic_500() {
        let err: AppError = std::io::Error::other("disk on fire").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal Server Error");
    }
}
