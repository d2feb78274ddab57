//! The JSON envelope every Kamus endpoint answers with.
//!
//! Success: `{code, status: "Success", message, data?}`.
//! Failure: `{code, status, message}` where `status` is `"Not Found"` for 404 and
//! `"Error"` otherwise.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Successful response body.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    #[serde(skip)]
    pub http_status: StatusCode,
    pub code: u16,
    pub status: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// 200 envelope carrying `data`.
    pub fn ok(message: &'static str, data: T) -> Self {
        Self::with_status(StatusCode::OK, message, Some(data))
    }

    fn with_status(http_status: StatusCode, message: &'static str, data: Option<T>) -> Self {
        Self {
            http_status,
            code: http_status.as_u16(),
            status: "Success",
            message,
            data,
        }
    }
}

impl Envelope<()> {
    /// 200 envelope without data.
    pub fn done(message: &'static str) -> Self {
        Self::with_status(StatusCode::OK, message, None)
    }

    /// 201 envelope without data.
    pub fn created(message: &'static str) -> Self {
        Self::with_status(StatusCode::CREATED, message, None)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.http_status, Json(&self)).into_response()
    }
}

/// Failure response body.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub code: u16,
    pub status: &'static str,
    pub message: &'a str,
}

impl<'a> ErrorEnvelope<'a> {
    pub fn new(http_status: StatusCode, message: &'a str) -> Self {
        Self {
            code: http_status.as_u16(),
            status: status_label(http_status),
            message,
        }
    }
}

/// Envelope `status` label for a failing HTTP status.
pub fn status_label(http_status: StatusCode) -> &'static str {
    if http_status == StatusCode::NOT_FOUND {
        "Not Found"
    } else {
        "Error"
    }
}

/// Render an error envelope with the given HTTP status.
pub fn error_response(http_status: StatusCode, message: &str) -> Response {
    (http_status, Json(ErrorEnvelope::new(http_status, message))).into_response()
}
