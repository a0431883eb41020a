pub use sea_orm_migration::prelude::*;

mod m20250701_000001_create_member_table;
mod m20250701_000002_create_post_table;
mod m20250701_000003_create_post_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250701_000001_create_member_table::Migration),
            Box::new(m20250701_000002_create_post_table::Migration),
            Box::new(m20250701_000003_create_post_comment_table::Migration),
        ]
    }
}
