//! Post data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::post::{CreatePostParam, Post, UpdatePostParam};

/// Repository providing database operations for posts.
///
/// Every read joins the author so the domain model carries the author's display name.
pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new post.
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post with its author's name
    /// - `Err(DbErr)` - Database error during insert or author lookup
    pub async fn create(&self, param: CreatePostParam) -> Result<Post, DbErr> {
        let now = Utc::now();

        let entity = entity::post::ActiveModel {
            create_date: ActiveValue::Set(now),
            modify_date: ActiveValue::Set(now),
            author_id: ActiveValue::Set(param.author_id),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let author = entity::prelude::Member::find_by_id(entity.author_id)
            .one(self.db)
            .await?;

        Ok(Post::from_entity(entity, author))
    }

    /// Gets all posts ordered by id, oldest first.
    pub async fn find_all(&self) -> Result<Vec<Post>, DbErr> {
        let rows = entity::prelude::Post::find()
            .find_also_related(entity::prelude::Member)
            .order_by_asc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(post, author)| Post::from_entity(post, author))
            .collect())
    }

    /// Gets a post by id.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - Post found
    /// - `Ok(None)` - No post with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let row = entity::prelude::Post::find_by_id(id)
            .find_also_related(entity::prelude::Member)
            .one(self.db)
            .await?;

        Ok(row.map(|(post, author)| Post::from_entity(post, author)))
    }

    /// Replaces title and content of a post and refreshes its modify date.
    ///
    /// # Returns
    /// - `Ok(Post)` - The updated post
    /// - `Err(DbErr::RecordNotUpdated)` - No post with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, param: UpdatePostParam) -> Result<Post, DbErr> {
        let entity = entity::post::ActiveModel {
            id: ActiveValue::Unchanged(param.id),
            modify_date: ActiveValue::Set(Utc::now()),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        let author = entity::prelude::Member::find_by_id(entity.author_id)
            .one(self.db)
            .await?;

        Ok(Post::from_entity(entity, author))
    }

    /// Deletes a post together with all of its comments in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Post and comments removed (also when the post did not exist)
    /// - `Err(DbErr)` - Database error; nothing is removed
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::PostComment::delete_many()
            .filter(entity::post_comment::Column::PostId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Post::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }
}
