//! Typed errors and HTTP mapping.
//!
//! Client errors (400, 404, 413) are rendered where they are raised. Everything else
//! becomes a 500 tagged with a [`ServerFault`] extension, which the error handler
//! middleware turns into the final body for the current environment.

use crate::response::error_body;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Config(_) | AppError::Db(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::NotFound(_) => "not_found",
            AppError::BadRequest(_) => "bad_request",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::Db(_) => "database_error",
            AppError::Internal(_) => "internal_error",
        }
    }
}

/// A body over the size limit stays a 413; every other bad JSON body is a 400.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    }
}

/// Details of an unexpected failure, attached to the 500 response so the
/// error handler can decide how much of it the client sees.
#[derive(Clone, Debug)]
pub struct ServerFault {
    pub kind: &'static str,
    pub message: String,
    pub detail: String,
}

impl ServerFault {
    pub fn public_body() -> serde_json::Value {
        error_body("server error")
    }

    pub fn diagnostic_body(&self) -> serde_json::Value {
        serde_json::json!({
            "message": self.message,
            "error": {
                "kind": self.kind,
                "detail": self.detail,
            }
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            return (status, Json(error_body(&self.to_string()))).into_response();
        }
        let fault = ServerFault {
            kind: self.kind(),
            message: self.to_string(),
            detail: format!("{:?}", self),
        };
        // Without the error handler installed nothing internal leaks.
        let mut res = (status, Json(ServerFault::public_body())).into_response();
        res.extensions_mut().insert(fault);
        res
    }
}
