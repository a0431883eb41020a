//! HTTP request handlers.
//!
//! Handlers resolve the actor when the route requires one, convert DTOs into service
//! parameters, call the service layer and wrap the result in an `RsData` envelope.
//! They never build a transport status themselves; the envelope code decides it.

pub mod member;
pub mod post;
pub mod post_comment;

#[cfg(test)]
mod test;
