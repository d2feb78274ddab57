use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use kamus_core::envelope::{error_response, status_label};

use crate::domain::types::{FieldError, SearchCriteriaError};

/// Definitions service error variants. `Display` is the client-facing message.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionsServiceError {
    #[error("Term or categoryId is required")]
    MissingSearchCriteria,
    #[error("Validation failed")]
    InvalidInput(Vec<FieldError>),
    #[error("Term not found")]
    TermNotFound,
    #[error("Definition not found")]
    DefinitionNotFound,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl DefinitionsServiceError {
    pub fn invalid_field(error: FieldError) -> Self {
        Self::InvalidInput(vec![error])
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingSearchCriteria | Self::InvalidInput(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::TermNotFound | Self::DefinitionNotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SearchCriteriaError> for DefinitionsServiceError {
    fn from(err: SearchCriteriaError) -> Self {
        match err {
            SearchCriteriaError::Missing => Self::MissingSearchCriteria,
            SearchCriteriaError::Invalid(field) => Self::invalid_field(field),
        }
    }
}

impl IntoResponse for DefinitionsServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::InvalidInput(errors) => {
                let body = serde_json::json!({
                    "code": status.as_u16(),
                    "status": status_label(status),
                    "messages": { "errors": errors },
                });
                (status, axum::Json(body)).into_response()
            }
            Self::Internal(ref e) => {
                // The cause stays in the log; clients only ever see the fixed message.
                tracing::error!(error = ?e, "internal error");
                error_response(status, &self.to_string())
            }
            _ => error_response(status, &self.to_string()),
        }
    }
}
