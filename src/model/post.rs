use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::{
    error::validation::ValidationErrors,
    util::validation::{not_blank_sized, Validate},
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i32,
    pub create_date: DateTime<Utc>,
    pub modify_date: DateTime<Utc>,
    pub author_id: i32,
    pub author_name: String,
    pub title: String,
    pub content: String,
}

/// Body for both writing and modifying a post.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PostFormDto {
    #[serde(default)]
    #[schema(min_length = 2, max_length = 100)]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(min_length = 2, max_length = 5000)]
    pub content: Option<String>,
}

impl Validate for PostFormDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        not_blank_sized(&mut errors, "title", self.title.as_deref(), 2, 100);
        not_blank_sized(&mut errors, "content", self.content.as_deref(), 2, 5000);

        errors.into_result()
    }
}
