//! Extractors that reject with `AppError`.
//!
//! Using these instead of axum's `Json` and `Path` keeps every rejection inside the
//! error envelope.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::{error::AppError, util::validation::Validate};

const CONTENT_TYPE_HEADER: &str = "Content-Type";
const MISSING_CONTENT_TYPE_MESSAGE: &str =
    "Required request header 'Content-Type' for method parameter type String is not present";

/// JSON request body that has passed field validation.
///
/// Rejections:
/// - no `Content-Type` header: `AppError::MissingHeader`
/// - wrong content type or undeserializable body: `AppError::MalformedBody`
/// - rule violations: `AppError::Validation` with every violation collected
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(CONTENT_TYPE) {
            return Err(AppError::MissingHeader {
                header: CONTENT_TYPE_HEADER.to_string(),
                message: MISSING_CONTENT_TYPE_MESSAGE.to_string(),
            });
        }

        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;

        Ok(Self(value))
    }
}

/// Path parameters; a value that doesn't parse addresses no resource.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;

        Ok(Self(value))
    }
}
