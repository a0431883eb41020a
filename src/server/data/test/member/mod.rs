use crate::server::{data::member::MemberRepository, model::member::CreateMemberParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod find_by_api_key;
mod find_by_username;
