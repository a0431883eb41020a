//! Member domain models and parameters.
//!
//! A member is both a forum account and, once resolved from an API key, the
//! authenticated actor of a request.

use crate::{model::member::MemberDto, server::model::base::BaseFields};

/// Registered member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub base: BaseFields,
    /// Login name, unique across members.
    pub username: String,
    /// Stored and compared as plain text.
    pub password: String,
    pub nickname: String,
    /// Bearer credential, unique across members.
    pub api_key: String,
}

impl Member {
    pub fn id(&self) -> i32 {
        self.base.id
    }

    /// Display name shown to other members.
    pub fn name(&self) -> &str {
        &self.nickname
    }

    /// Converts the member domain model to a DTO for API responses.
    ///
    /// The DTO never carries the password or the API key.
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.base.id,
            create_date: self.base.create_date,
            modify_date: self.base.modify_date,
            name: self.nickname,
        }
    }

    /// Converts an entity model to a member domain model at the repository boundary.
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            base: BaseFields::new(entity.id, entity.create_date, entity.modify_date),
            username: entity.username,
            password: entity.password,
            nickname: entity.nickname,
            api_key: entity.api_key,
        }
    }
}

/// Parameters for registering a new member.
#[derive(Debug, Clone)]
pub struct CreateMemberParam {
    pub username: String,
    pub password: String,
    pub nickname: String,
}
