use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{parse_bearer_token, AuthGuard},
};
use axum::http::HeaderValue;
use test_utils::{builder::TestBuilder, factory};

mod parse_bearer_token;
mod require_actor;
