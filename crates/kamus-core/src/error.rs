use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::envelope::error_response;

/// Rejections raised by shared extractors, rendered with the Kamus error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error_response(self.status_code(), &self.to_string())
    }
}
