//! Wire-level types shared by every endpoint.
//!
//! Contains the uniform response envelope (`RsData`) and the request/response DTOs
//! for members, posts and comments. Server-side domain models convert into these
//! types at the controller boundary.

pub mod api;
pub mod member;
pub mod post;
pub mod post_comment;
