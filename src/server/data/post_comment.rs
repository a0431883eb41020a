//! Comment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::post_comment::{
    CreatePostCommentParam, PostComment, UpdatePostCommentParam,
};

/// Repository providing database operations for comments.
///
/// Comments are always addressed through their post: a lookup by id only matches
/// when the comment belongs to the given post.
pub struct PostCommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostCommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new comment.
    pub async fn create(&self, param: CreatePostCommentParam) -> Result<PostComment, DbErr> {
        let now = Utc::now();

        let entity = entity::post_comment::ActiveModel {
            create_date: ActiveValue::Set(now),
            modify_date: ActiveValue::Set(now),
            author_id: ActiveValue::Set(param.author_id),
            post_id: ActiveValue::Set(param.post_id),
            content: ActiveValue::Set(param.content),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let author = entity::prelude::Member::find_by_id(entity.author_id)
            .one(self.db)
            .await?;

        Ok(PostComment::from_entity(entity, author))
    }

    /// Gets all comments of a post ordered by id, oldest first.
    pub async fn find_all_by_post(&self, post_id: i32) -> Result<Vec<PostComment>, DbErr> {
        let rows = entity::prelude::PostComment::find()
            .filter(entity::post_comment::Column::PostId.eq(post_id))
            .find_also_related(entity::prelude::Member)
            .order_by_asc(entity::post_comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| PostComment::from_entity(comment, author))
            .collect())
    }

    /// Gets a comment by id within a post.
    ///
    /// # Returns
    /// - `Ok(Some(PostComment))` - Comment exists and belongs to `post_id`
    /// - `Ok(None)` - No such comment under that post
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_post_and_id(
        &self,
        post_id: i32,
        id: i32,
    ) -> Result<Option<PostComment>, DbErr> {
        let row = entity::prelude::PostComment::find_by_id(id)
            .filter(entity::post_comment::Column::PostId.eq(post_id))
            .find_also_related(entity::prelude::Member)
            .one(self.db)
            .await?;

        Ok(row.map(|(comment, author)| PostComment::from_entity(comment, author)))
    }

    /// Replaces the content of a comment and refreshes its modify date.
    pub async fn update(&self, param: UpdatePostCommentParam) -> Result<PostComment, DbErr> {
        let entity = entity::post_comment::ActiveModel {
            id: ActiveValue::Unchanged(param.id),
            modify_date: ActiveValue::Set(Utc::now()),
            content: ActiveValue::Set(param.content),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        let author = entity::prelude::Member::find_by_id(entity.author_id)
            .one(self.db)
            .await?;

        Ok(PostComment::from_entity(entity, author))
    }

    /// Deletes a comment by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::PostComment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
