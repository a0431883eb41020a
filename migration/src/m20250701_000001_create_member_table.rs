use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(
                        timestamp_with_time_zone(Member::CreateDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Member::ModifyDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(string_uniq(Member::Username))
                    .col(string(Member::Password))
                    .col(string(Member::Nickname))
                    .col(string_uniq(Member::ApiKey))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    CreateDate,
    ModifyDate,
    Username,
    Password,
    Nickname,
    ApiKey,
}
