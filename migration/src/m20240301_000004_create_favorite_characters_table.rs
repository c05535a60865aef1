use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000001_create_user_table::User;
use super::m20240301_000002_create_characters_table::Characters;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacters::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteCharacters::Id))
                    .col(integer(FavoriteCharacters::UserId))
                    .col(integer(FavoriteCharacters::CharacterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_characters_user_id")
                            .from(FavoriteCharacters::Table, FavoriteCharacters::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_characters_character_id")
                            .from(FavoriteCharacters::Table, FavoriteCharacters::CharacterId)
                            .to(Characters::Table, Characters::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_favorite_characters_user_character_unique")
                            .col(FavoriteCharacters::UserId)
                            .col(FavoriteCharacters::CharacterId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteCharacters::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoriteCharacters {
    Table,
    Id,
    UserId,
    CharacterId,
}
