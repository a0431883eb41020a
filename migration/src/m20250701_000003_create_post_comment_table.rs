use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250701_000001_create_member_table::Member, m20250701_000002_create_post_table::Post,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostComment::Table)
                    .if_not_exists()
                    .col(pk_auto(PostComment::Id))
                    .col(
                        timestamp_with_time_zone(PostComment::CreateDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(PostComment::ModifyDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(integer(PostComment::AuthorId))
                    .col(integer(PostComment::PostId))
                    .col(string(PostComment::Content))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_comment_author_id")
                            .from(PostComment::Table, PostComment::AuthorId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_comment_post_id")
                            .from(PostComment::Table, PostComment::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostComment {
    Table,
    Id,
    CreateDate,
    ModifyDate,
    AuthorId,
    PostId,
    Content,
}
