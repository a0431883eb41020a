//! Comment factory for creating test post comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable content.
pub struct PostCommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    author_id: i32,
    content: String,
}

impl<'a> PostCommentFactory<'a> {
    /// Creates a new PostCommentFactory with default content `"Comment {id}"`.
    pub fn new(db: &'a DatabaseConnection, post_id: i32, author_id: i32) -> Self {
        Self {
            db,
            post_id,
            author_id,
            content: format!("Comment {}", next_id()),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::post_comment::Model, DbErr> {
        let now = Utc::now();
        entity::post_comment::ActiveModel {
            create_date: ActiveValue::Set(now),
            modify_date: ActiveValue::Set(now),
            author_id: ActiveValue::Set(self.author_id),
            post_id: ActiveValue::Set(self.post_id),
            content: ActiveValue::Set(self.content),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default content on `post_id` authored by `author_id`.
pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: i32,
    author_id: i32,
) -> Result<entity::post_comment::Model, DbErr> {
    PostCommentFactory::new(db, post_id, author_id).build().await
}
