//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20250302_000001_create_games;
mod m20250302_000002_create_users;
mod m20250302_000003_create_auth_tokens;
mod m20250302_000004_create_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250302_000001_create_games::Migration),
            Box::new(m20250302_000002_create_users::Migration),
            Box::new(m20250302_000003_create_auth_tokens::Migration),
            Box::new(m20250302_000004_create_favorites::Migration),
        ]
    }
}
