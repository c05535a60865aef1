use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000001_create_user_table::User;
use super::m20240301_000003_create_planets_table::Planets;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePlanets::Id))
                    .col(integer(FavoritePlanets::UserId))
                    .col(integer(FavoritePlanets::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planets_user_id")
                            .from(FavoritePlanets::Table, FavoritePlanets::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planets_planet_id")
                            .from(FavoritePlanets::Table, FavoritePlanets::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_favorite_planets_user_planet_unique")
                            .col(FavoritePlanets::UserId)
                            .col(FavoritePlanets::PlanetId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritePlanets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoritePlanets {
    Table,
    Id,
    UserId,
    PlanetId,
}
