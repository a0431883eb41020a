//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping
//! entity types out of the service layer. All database queries, inserts, updates and
//! deletes are performed through these repositories.

pub mod member;
pub mod post;
pub mod post_comment;

#[cfg(test)]
mod test;
