pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_table;
mod m20260111_000002_create_contents_table;
mod m20260113_000003_create_likes_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_table::Migration),
            Box::new(m20260111_000002_create_contents_table::Migration),
            Box::new(m20260113_000003_create_likes_table::Migration),
        ]
    }
}
