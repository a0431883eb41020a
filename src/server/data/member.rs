//! Member data repository for database operations.
//!
//! Provides the `MemberRepository` for creating members and looking them up by the
//! keys the API needs: username (login and duplicate checks) and API key
//! (actor resolution).

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::member::{CreateMemberParam, Member};

/// Repository providing database operations for members.
pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new member.
    ///
    /// # Arguments
    /// - `param` - Username, password and nickname of the new member
    /// - `api_key` - Freshly generated bearer credential
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(DbErr)` - Database error, including unique violations on username or API key
    pub async fn create(&self, param: CreateMemberParam, api_key: String) -> Result<Member, DbErr> {
        let now = Utc::now();

        let entity = entity::member::ActiveModel {
            create_date: ActiveValue::Set(now),
            modify_date: ActiveValue::Set(now),
            username: ActiveValue::Set(param.username),
            password: ActiveValue::Set(param.password),
            nickname: ActiveValue::Set(param.nickname),
            api_key: ActiveValue::Set(api_key),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    /// Finds a member by login name.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member with that username
    /// - `Ok(None)` - Username not registered
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Finds the member owning an API key.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member whose credential matches exactly
    /// - `Ok(None)` - No member has that API key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_api_key(&self, api_key: &str) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::ApiKey.eq(api_key))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Counts all registered members.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Member::find().count(self.db).await
    }
}
