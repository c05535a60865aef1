pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_user_table;
mod m20240301_000002_create_characters_table;
mod m20240301_000003_create_planets_table;
mod m20240301_000004_create_favorite_characters_table;
mod m20240301_000005_create_favorite_planets_table;
mod m20240302_000006_seed_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_user_table::Migration),
            Box::new(m20240301_000002_create_characters_table::Migration),
            Box::new(m20240301_000003_create_planets_table::Migration),
            Box::new(m20240301_000004_create_favorite_characters_table::Migration),
            Box::new(m20240301_000005_create_favorite_planets_table::Migration),
            Box::new(m20240302_000006_seed_catalog::Migration),
        ]
    }
}
