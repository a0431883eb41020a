//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They enforce existence and ownership rules before any mutation, work with domain
//! models rather than DTOs or entity models, and report failures as `AppError`.

pub mod member;
pub mod post;
pub mod post_comment;
