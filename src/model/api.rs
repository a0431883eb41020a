//! Uniform response envelope.
//!
//! Every response body, success or failure, is an `RsData` serialized as
//! `{ "code": "<status>-<seq>", "message": "...", "data": ... }`. The transport
//! status is always derived from the leading numeric segment of `code`, so a
//! handler can never emit a status that disagrees with its envelope.

use std::{fmt, str::FromStr};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

/// Machine-readable result code of the form `"<http-status>-<sequence>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultCode {
    status: u16,
    seq: u16,
}

impl ResultCode {
    /// Read, update, delete and login successes.
    pub const OK: ResultCode = ResultCode::new(200, 1);
    /// Resource creation successes.
    pub const CREATED: ResultCode = ResultCode::new(201, 1);

    pub const fn new(status: u16, seq: u16) -> Self {
        Self { status, seq }
    }

    /// Transport status for this code.
    ///
    /// Falls back to 500 when the leading segment is not a valid HTTP status.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.status, self.seq)
    }
}

/// Error returned when a string is not of the form `"<status>-<seq>"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid result code '{0}', expected '<status>-<sequence>'")]
pub struct ParseResultCodeError(pub String);

impl FromStr for ResultCode {
    type Err = ParseResultCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseResultCodeError(s.to_string());

        let (status, seq) = s.split_once('-').ok_or_else(invalid)?;
        let status = status.parse::<u16>().map_err(|_| invalid())?;
        let seq = seq.parse::<u16>().map_err(|_| invalid())?;

        Ok(Self::new(status, seq))
    }
}

impl Serialize for ResultCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResultCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

/// Result envelope wrapping every response body.
///
/// `data` is only serialized when present, which is only ever the case for
/// successful operations that produce a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RsData<T> {
    #[schema(value_type = String, example = "200-1")]
    pub code: ResultCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> RsData<T> {
    /// Envelope without payload.
    pub fn new(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Envelope carrying a payload.
    pub fn with_data(code: ResultCode, message: impl Into<String>, data: T) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }
}

impl<T: Serialize> IntoResponse for RsData<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Documentation schema for envelopes that never carry `data`.
///
/// Serializes identically to an `RsData` whose payload is absent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    #[schema(example = "404-1")]
    pub code: String,
    pub message: String,
}
