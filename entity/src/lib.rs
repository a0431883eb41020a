//! SeaORM entities for the forum schema.
//!
//! Each module mirrors one table created by the `migration` crate.

pub mod prelude;

pub mod member;
pub mod post;
pub mod post_comment;
