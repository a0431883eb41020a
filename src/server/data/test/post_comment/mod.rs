use crate::server::{
    data::post_comment::PostCommentRepository,
    model::post_comment::{CreatePostCommentParam, UpdatePostCommentParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_all_by_post;
mod find_by_post_and_id;
mod update;
