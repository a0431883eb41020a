//! Comment operations scoped to their owning post.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::post_comment::PostCommentRepository,
    error::AppError,
    model::{
        member::Member,
        post_comment::{CreatePostCommentParam, PostComment, UpdatePostCommentParam},
    },
    service::post::PostService,
};

const MODIFY_FORBIDDEN_MESSAGE: &str = "댓글 수정 권한이 없습니다.";
const DELETE_FORBIDDEN_MESSAGE: &str = "댓글 삭제 권한이 없습니다.";

pub struct PostCommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostCommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all comments of a post.
    ///
    /// # Returns
    /// - `Ok(Vec<PostComment>)` - Comments, oldest first
    /// - `Err(AppError::NotFound)` - The post does not exist
    pub async fn find_all(&self, post_id: i32) -> Result<Vec<PostComment>, AppError> {
        PostService::new(self.db).get(post_id).await?;

        let repo = PostCommentRepository::new(self.db);

        Ok(repo.find_all_by_post(post_id).await?)
    }

    /// Gets a comment under its post.
    ///
    /// # Returns
    /// - `Ok(PostComment)` - Comment found
    /// - `Err(AppError::NotFound)` - Post missing, or comment missing under that post
    pub async fn get(&self, post_id: i32, id: i32) -> Result<PostComment, AppError> {
        let repo = PostCommentRepository::new(self.db);

        repo.find_by_post_and_id(post_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment {} of post {}", id, post_id)))
    }

    /// Writes a comment on an existing post.
    pub async fn write(
        &self,
        actor: &Member,
        post_id: i32,
        content: String,
    ) -> Result<PostComment, AppError> {
        PostService::new(self.db).get(post_id).await?;

        let repo = PostCommentRepository::new(self.db);

        Ok(repo
            .create(CreatePostCommentParam {
                author_id: actor.id(),
                post_id,
                content,
            })
            .await?)
    }

    /// Replaces the content of a comment owned by `actor`.
    ///
    /// # Returns
    /// - `Ok(PostComment)` - The updated comment
    /// - `Err(AppError::NotFound)` - No such comment under that post
    /// - `Err(AppError::Forbidden)` - Actor is not the author; the comment is unchanged
    pub async fn modify(
        &self,
        actor: &Member,
        post_id: i32,
        id: i32,
        content: String,
    ) -> Result<PostComment, AppError> {
        let comment = self.get(post_id, id).await?;

        if !comment.is_authored_by(actor) {
            return Err(AppError::Forbidden(MODIFY_FORBIDDEN_MESSAGE.to_string()));
        }

        let repo = PostCommentRepository::new(self.db);

        Ok(repo.update(UpdatePostCommentParam { id, content }).await?)
    }

    /// Deletes a comment owned by `actor`.
    pub async fn delete(&self, actor: &Member, post_id: i32, id: i32) -> Result<(), AppError> {
        let comment = self.get(post_id, id).await?;

        if !comment.is_authored_by(actor) {
            return Err(AppError::Forbidden(DELETE_FORBIDDEN_MESSAGE.to_string()));
        }

        let repo = PostCommentRepository::new(self.db);
        repo.delete(id).await?;

        Ok(())
    }
}
