//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the one place where
//! failures become HTTP responses. Every handler returns `Result<_, AppError>`;
//! `AppError::code` and `AppError::client_message` define the complete mapping from
//! failure kind to envelope code and message, and `IntoResponse for AppError` turns
//! that into an `RsData` whose code prefix decides the transport status.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::api::{ResultCode, RsData},
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationErrors},
};

const NOT_FOUND_MESSAGE: &str = "해당 데이터가 존재하지 않습니다.";
const MALFORMED_BODY_MESSAGE: &str = "요청 본문이 올바르지 않습니다.";
const METHOD_NOT_ALLOWED_MESSAGE: &str = "지원하지 않는 요청 메서드입니다.";
const INTERNAL_ERROR_MESSAGE: &str = "서버 내부 오류가 발생했습니다.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic conversion so services and repositories can
/// propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Results in `500-1`; configuration issues prevent normal operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Credential or login failure.
    ///
    /// Code and message come from `AuthError::code` / `AuthError::client_message`
    /// (`401-1`, `401-2` or `401-3`).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in `500-1` with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// IO error, e.g. failing to bind the listener at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body failed field validation.
    ///
    /// Results in `400-1` with the sorted violation lines as message.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Request body could not be read or deserialized.
    ///
    /// Results in `400-1` with a fixed message; the detail is only logged.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// A required non-credential request header is absent.
    ///
    /// Results in `400-1` with message `"<header>-NotBlank-<message>"`.
    #[error("{header}-NotBlank-{message}")]
    MissingHeader {
        /// Name of the missing header
        header: String,
        /// Explanation appended after the rule identifier
        message: String,
    },

    /// Resource not found error.
    ///
    /// Results in `404-1` with a fixed message. The field describes what was looked
    /// up and is only logged.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The path exists but does not accept the request method.
    ///
    /// Results in `405-1` with a fixed message. The field holds the rejected
    /// method and path and is only logged.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Actor is not the owner of the entity it tried to change.
    ///
    /// Results in `403-1` with the provided operation-specific message.
    #[error("{0}")]
    Forbidden(String),

    /// A unique key is already taken.
    ///
    /// Results in `409-1` with the provided message.
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    /// Envelope code for this failure. The leading segment is the HTTP status.
    pub fn code(&self) -> ResultCode {
        match self {
            Self::AuthErr(err) => err.code(),
            Self::Validation(_) | Self::MalformedBody(_) | Self::MissingHeader { .. } => {
                ResultCode::new(400, 1)
            }
            Self::Forbidden(_) => ResultCode::new(403, 1),
            Self::NotFound(_) => ResultCode::new(404, 1),
            Self::MethodNotAllowed(_) => ResultCode::new(405, 1),
            Self::Conflict(_) => ResultCode::new(409, 1),
            Self::ConfigErr(_) | Self::DbErr(_) | Self::IoErr(_) => ResultCode::new(500, 1),
        }
    }

    /// Message shown to the client.
    ///
    /// Only validation and missing-header failures interpolate request context;
    /// internal details never leave the server.
    pub fn client_message(&self) -> String {
        match self {
            Self::AuthErr(err) => err.client_message().to_string(),
            Self::Validation(errors) => errors.render(),
            Self::MalformedBody(_) => MALFORMED_BODY_MESSAGE.to_string(),
            Self::MissingHeader { .. } => self.to_string(),
            Self::NotFound(_) => NOT_FOUND_MESSAGE.to_string(),
            Self::MethodNotAllowed(_) => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            Self::Forbidden(message) | Self::Conflict(message) => message.clone(),
            Self::ConfigErr(_) | Self::DbErr(_) | Self::IoErr(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Server errors are logged at error level with full details; client errors are
/// logged at debug level. The response body is always an `RsData` without data.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        if code.status_code().is_server_error() {
            tracing::error!(%code, "{}", self);
        } else {
            tracing::debug!(%code, "{}", self);
        }

        RsData::<()>::new(code, self.client_message()).into_response()
    }
}

/// JSON extraction failures (syntax errors, type mismatches, unreadable bodies).
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

/// Path parameters that don't parse (e.g. `/posts/abc`) address no resource.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NotFound(rejection.body_text())
    }
}
