//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a member, a post authored by that member and a comment on the post.
///
/// All entities are created with default values. Use the individual factories if
/// you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((member, post, comment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::member::Model,
        entity::post::Model,
        entity::post_comment::Model,
    ),
    DbErr,
> {
    let member = crate::factory::member::create_member(db).await?;
    let post = crate::factory::post::create_post(db, member.id).await?;
    let comment = crate::factory::post_comment::create_comment(db, post.id, member.id).await?;

    Ok((member, post, comment))
}
