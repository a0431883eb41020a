use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::{
    error::validation::ValidationErrors,
    util::validation::{not_blank_sized, Validate},
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: i32,
    pub create_date: DateTime<Utc>,
    pub modify_date: DateTime<Utc>,
    /// Display name (the member's nickname).
    pub name: String,
}

/// Registration request body. Missing and `null` fields are absent and fail `NotBlank` only.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct JoinMemberDto {
    #[serde(default)]
    #[schema(min_length = 2, max_length = 30)]
    pub username: Option<String>,
    #[serde(default)]
    #[schema(min_length = 2, max_length = 30)]
    pub password: Option<String>,
    #[serde(default)]
    #[schema(min_length = 2, max_length = 30)]
    pub nickname: Option<String>,
}

impl Validate for JoinMemberDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        not_blank_sized(&mut errors, "username", self.username.as_deref(), 2, 30);
        not_blank_sized(&mut errors, "password", self.password.as_deref(), 2, 30);
        not_blank_sized(&mut errors, "nickname", self.nickname.as_deref(), 2, 30);

        errors.into_result()
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginMemberDto {
    #[serde(default)]
    #[schema(min_length = 2, max_length = 30)]
    pub username: Option<String>,
    #[serde(default)]
    #[schema(min_length = 2, max_length = 30)]
    pub password: Option<String>,
}

impl Validate for LoginMemberDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        not_blank_sized(&mut errors, "username", self.username.as_deref(), 2, 30);
        not_blank_sized(&mut errors, "password", self.password.as_deref(), 2, 30);

        errors.into_result()
    }
}

/// Login payload: the member plus the API key to send as `Authorization: Bearer <apiKey>`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResultDto {
    pub item: MemberDto,
    pub api_key: String,
}
