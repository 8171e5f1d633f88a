use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::proto::ErrorResponse;

/// Errors surfaced at the HTTP boundary.
///
/// Classification has no error path; only request decoding can fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl AppError {
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 400 malformed JSON, 415 wrong content type, 422 missing/mistyped fields
            Self::InvalidBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        tracing::debug!(%status, error = %self, "request rejected");
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
