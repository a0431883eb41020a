use axum::http::HeaderValue;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::member::Member,
    service::member::MemberService,
};

pub const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the credential from a raw `Authorization` header value.
///
/// # Arguments
/// - `header` - Header value, `None` when the header is absent
///
/// # Returns
/// - `Ok(&str)` - Credential with the prefix and surrounding whitespace removed
/// - `Err(AuthError::MissingCredential)` - Header absent or whitespace-only
/// - `Err(AuthError::MalformedCredential)` - No `Bearer ` prefix, or nothing after it
pub fn parse_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let value = match header {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(AuthError::MissingCredential),
    };

    let Some(token) = value.strip_prefix(BEARER_PREFIX) else {
        return Err(AuthError::MalformedCredential);
    };

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MalformedCredential);
    }

    Ok(token)
}

/// Resolves the member acting on a request from its bearer credential.
///
/// Nothing is cached; every call performs a fresh lookup.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requires a valid credential and returns its owner.
    ///
    /// # Arguments
    /// - `header` - The request's `Authorization` header, if any
    ///
    /// # Returns
    /// - `Ok(Member)` - The member owning the credential
    /// - `Err(AppError::AuthErr(_))` - Missing, malformed or unknown credential
    /// - `Err(AppError::DbErr(_))` - Database error during lookup
    pub async fn require_actor(&self, header: Option<&HeaderValue>) -> Result<Member, AppError> {
        let raw = header
            .map(|value| value.to_str())
            .transpose()
            .map_err(|_| AuthError::MalformedCredential)?;

        let token = parse_bearer_token(raw)?;

        let Some(member) = MemberService::new(self.db).find_by_api_key(token).await? else {
            return Err(AuthError::InvalidCredential.into());
        };

        tracing::debug!(member_id = member.id(), "Resolved request actor");

        Ok(member)
    }
}
