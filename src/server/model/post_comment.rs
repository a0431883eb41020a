//! Comment domain models and parameters.

use crate::{
    model::post_comment::PostCommentDto,
    server::model::{base::BaseFields, member::Member},
};

/// Comment on a post with its author's id and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostComment {
    pub base: BaseFields,
    pub author_id: i32,
    pub author_name: String,
    pub post_id: i32,
    pub content: String,
}

impl PostComment {
    pub fn id(&self) -> i32 {
        self.base.id
    }

    /// Whether `member` wrote this comment.
    pub fn is_authored_by(&self, member: &Member) -> bool {
        self.author_id == member.id()
    }

    pub fn into_dto(self) -> PostCommentDto {
        PostCommentDto {
            id: self.base.id,
            create_date: self.base.create_date,
            modify_date: self.base.modify_date,
            author_id: self.author_id,
            author_name: self.author_name,
            post_id: self.post_id,
            content: self.content,
        }
    }

    pub fn from_entity(
        entity: entity::post_comment::Model,
        author: Option<entity::member::Model>,
    ) -> Self {
        Self {
            base: BaseFields::new(entity.id, entity.create_date, entity.modify_date),
            author_id: entity.author_id,
            author_name: author.map(|a| a.nickname).unwrap_or_default(),
            post_id: entity.post_id,
            content: entity.content,
        }
    }
}

/// Parameters for writing a comment under a post.
#[derive(Debug, Clone)]
pub struct CreatePostCommentParam {
    pub author_id: i32,
    pub post_id: i32,
    pub content: String,
}

/// Parameters for modifying a comment.
#[derive(Debug, Clone)]
pub struct UpdatePostCommentParam {
    pub id: i32,
    pub content: String,
}
