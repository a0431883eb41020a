//! Request processing shared by the controllers.
//!
//! - `auth` resolves the acting member from the `Authorization` header
//! - `extract` provides extractors whose rejections are `AppError`s

pub mod auth;
pub mod extract;

#[cfg(test)]
mod test;
