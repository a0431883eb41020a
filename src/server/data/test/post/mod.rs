use crate::server::{
    data::post::PostRepository,
    model::post::{CreatePostParam, UpdatePostParam},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_all;
mod find_by_id;
mod update;
