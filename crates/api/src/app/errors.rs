use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use oficina_auth::{AuthError, AuthzError};
use oficina_core::{DomainError, ErrorType};

/// Message returned for every unexpected failure; details only go to the log.
pub const MSG_INTERNAL: &str = "Ocorreu um erro interno no servidor.";

/// Error type returned by handlers and middleware.
///
/// Rendered as `{"message": ..., "statusCode": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for ApiError {
    fn from(value: AuthError) -> Self {
        Self::Domain(value.into())
    }
}

impl From<AuthzError> for ApiError {
    fn from(value: AuthzError) -> Self {
        Self::Domain(value.into())
    }
}

pub fn status_for(error_type: ErrorType) -> StatusCode {
    match error_type {
        ErrorType::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorType::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorType::Forbidden => StatusCode::FORBIDDEN,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain(err) => {
                let status = status_for(err.error_type());
                tracing::warn!(
                    error_type = ?err.error_type(),
                    status = status.as_u16(),
                    message = %err,
                    "request failed"
                );
                json_error(status, err.message())
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "unexpected error while handling request");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
            }
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
            "statusCode": status.as_u16(),
        })),
    )
        .into_response()
}
