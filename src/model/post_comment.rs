use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::{
    error::validation::ValidationErrors,
    util::validation::{not_blank_sized, Validate},
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentDto {
    pub id: i32,
    pub create_date: DateTime<Utc>,
    pub modify_date: DateTime<Utc>,
    pub author_id: i32,
    pub author_name: String,
    pub post_id: i32,
    pub content: String,
}

/// Body for both writing and modifying a comment.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PostCommentFormDto {
    #[serde(default)]
    #[schema(min_length = 2, max_length = 100)]
    pub content: Option<String>,
}

impl Validate for PostCommentFormDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        not_blank_sized(&mut errors, "content", self.content.as_deref(), 2, 100);

        errors.into_result()
    }
}
