use sea_orm::DatabaseConnection;

use crate::server::{
    data::post::PostRepository,
    error::AppError,
    model::{
        member::Member,
        post::{CreatePostParam, Post, UpdatePostParam},
    },
};

const MODIFY_FORBIDDEN_MESSAGE: &str = "권한이 없습니다.";
const DELETE_FORBIDDEN_MESSAGE: &str = "글 삭제 권한이 없습니다.";

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all posts, oldest first
    pub async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        let repo = PostRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    /// Gets a post by id
    ///
    /// # Returns
    /// - `Ok(Post)` - Post found
    /// - `Err(AppError::NotFound)` - No post with that id
    pub async fn get(&self, id: i32) -> Result<Post, AppError> {
        let repo = PostRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {}", id)))
    }

    /// Writes a new post authored by `actor`
    pub async fn write(
        &self,
        actor: &Member,
        title: String,
        content: String,
    ) -> Result<Post, AppError> {
        let repo = PostRepository::new(self.db);

        let post = repo
            .create(CreatePostParam {
                author_id: actor.id(),
                title,
                content,
            })
            .await?;

        tracing::debug!(post_id = post.id(), author_id = actor.id(), "Post written");

        Ok(post)
    }

    /// Replaces title and content of a post owned by `actor`
    ///
    /// # Returns
    /// - `Ok(Post)` - The updated post
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::Forbidden)` - Actor is not the author; the post is unchanged
    pub async fn modify(
        &self,
        actor: &Member,
        id: i32,
        title: String,
        content: String,
    ) -> Result<Post, AppError> {
        let post = self.get(id).await?;

        if !post.is_authored_by(actor) {
            return Err(AppError::Forbidden(MODIFY_FORBIDDEN_MESSAGE.to_string()));
        }

        let repo = PostRepository::new(self.db);

        Ok(repo.update(UpdatePostParam { id, title, content }).await?)
    }

    /// Deletes a post owned by `actor` together with its comments
    ///
    /// # Returns
    /// - `Ok(())` - Post and comments removed
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::Forbidden)` - Actor is not the author; nothing is removed
    pub async fn delete(&self, actor: &Member, id: i32) -> Result<(), AppError> {
        let post = self.get(id).await?;

        if !post.is_authored_by(actor) {
            return Err(AppError::Forbidden(DELETE_FORBIDDEN_MESSAGE.to_string()));
        }

        let repo = PostRepository::new(self.db);
        repo.delete(id).await?;

        tracing::debug!(post_id = id, author_id = actor.id(), "Post deleted");

        Ok(())
    }
}
