//! Member registration, login and credential lookup.

use rand::Rng;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    model::member::{CreateMemberParam, Member},
};

pub const DUPLICATE_USERNAME_MESSAGE: &str = "이미 존재하는 아이디입니다.";

/// Length of generated API keys.
pub const API_KEY_LENGTH: usize = 32;

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new member with a freshly generated API key.
    ///
    /// The username is checked before the insert; a unique violation raised by a
    /// concurrent registration is reported the same way.
    ///
    /// # Arguments
    /// - `param` - Username, password and nickname of the new member
    ///
    /// # Returns
    /// - `Ok(Member)` - The registered member
    /// - `Err(AppError::Conflict)` - Username already taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn join(&self, param: CreateMemberParam) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        if repo.find_by_username(&param.username).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_USERNAME_MESSAGE.to_string()));
        }

        let member = repo
            .create(param, Self::generate_api_key())
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict(DUPLICATE_USERNAME_MESSAGE.to_string())
                }
                _ => AppError::DbErr(err),
            })?;

        tracing::info!(member_id = member.id(), username = %member.username, "Member registered");

        Ok(member)
    }

    /// Checks a username and password pair.
    ///
    /// # Returns
    /// - `Ok(Member)` - Credentials match
    /// - `Err(AppError::AuthErr(UnknownUsername))` - No member with that username
    /// - `Err(AppError::AuthErr(PasswordMismatch))` - Password differs
    pub async fn login(&self, username: &str, password: &str) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        let member = repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AuthError::UnknownUsername(username.to_string()))?;

        if member.password != password {
            return Err(AuthError::PasswordMismatch(member.id()).into());
        }

        Ok(member)
    }

    /// Finds the member owning an API key.
    pub async fn find_by_api_key(&self, api_key: &str) -> Result<Option<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo.find_by_api_key(api_key).await?)
    }

    /// Counts registered members.
    pub async fn count(&self) -> Result<u64, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo.count().await?)
    }

    /// Generates a random alphanumeric API key.
    ///
    /// # Returns
    /// A 32-character random string.
    fn generate_api_key() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..API_KEY_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}
