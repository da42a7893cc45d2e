use sea_orm_migration::prelude::*;

mod m20261001_000001_create_media_items;
mod m20261001_000002_create_comments;
mod m20261001_000003_create_likes;
mod m20261001_000004_create_ratings;
mod m20261001_000005_create_user_follows;
mod m20261001_000006_add_lookup_indexes;
mod m20261001_000007_create_tags;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_media_items::Migration),
            Box::new(m20261001_000002_create_comments::Migration),
            Box::new(m20261001_000003_create_likes::Migration),
            Box::new(m20261001_000004_create_ratings::Migration),
            Box::new(m20261001_000005_create_user_follows::Migration),
            Box::new(m20261001_000006_add_lookup_indexes::Migration),
            Box::new(m20261001_000007_create_tags::Migration),
        ]
    }
}
