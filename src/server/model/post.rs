//! Post domain models and parameters.

use crate::{
    model::post::PostDto,
    server::model::{base::BaseFields, member::Member},
};

/// Post with its author's id and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub base: BaseFields,
    pub author_id: i32,
    pub author_name: String,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn id(&self) -> i32 {
        self.base.id
    }

    /// Whether `member` wrote this post.
    pub fn is_authored_by(&self, member: &Member) -> bool {
        self.author_id == member.id()
    }

    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.base.id,
            create_date: self.base.create_date,
            modify_date: self.base.modify_date,
            author_id: self.author_id,
            author_name: self.author_name,
            title: self.title,
            content: self.content,
        }
    }

    /// Converts a post entity and its joined author to a domain model.
    ///
    /// The foreign key guarantees an author for rows read through
    /// `find_also_related`; a missing author yields an empty name.
    pub fn from_entity(entity: entity::post::Model, author: Option<entity::member::Model>) -> Self {
        Self {
            base: BaseFields::new(entity.id, entity.create_date, entity.modify_date),
            author_id: entity.author_id,
            author_name: author.map(|a| a.nickname).unwrap_or_default(),
            title: entity.title,
            content: entity.content,
        }
    }
}

/// Parameters for writing a new post.
#[derive(Debug, Clone)]
pub struct CreatePostParam {
    pub author_id: i32,
    pub title: String,
    pub content: String,
}

/// Parameters for modifying an existing post.
#[derive(Debug, Clone)]
pub struct UpdatePostParam {
    pub id: i32,
    pub title: String,
    pub content: String,
}
