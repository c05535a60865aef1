//! Seeds the character and planet catalog.
//!
//! The API exposes no write endpoints for the catalog, so the initial rows are
//! provided here. Values follow the public SWAPI dataset.

use sea_orm_migration::prelude::*;

use super::m20240301_000002_create_characters_table::Characters;
use super::m20240301_000003_create_planets_table::Planets;

const CHARACTERS: &[(&str, Option<i32>, Option<i32>)] = &[
    ("Luke Skywalker", Some(172), Some(77)),
    ("C-3PO", Some(167), Some(75)),
    ("R2-D2", Some(96), Some(32)),
    ("Darth Vader", Some(202), Some(136)),
    ("Leia Organa", Some(150), Some(49)),
    ("Obi-Wan Kenobi", Some(182), Some(77)),
    ("Han Solo", Some(180), Some(80)),
    ("Chewbacca", Some(228), Some(112)),
    ("Yoda", Some(66), Some(17)),
    ("Jabba Desilijic Tiure", Some(175), None),
];

const PLANETS: &[(&str, Option<i64>)] = &[
    ("Tatooine", Some(200_000)),
    ("Alderaan", Some(2_000_000_000)),
    ("Yavin IV", Some(1_000)),
    ("Hoth", None),
    ("Dagobah", None),
    ("Bespin", Some(6_000_000)),
    ("Endor", Some(30_000_000)),
    ("Naboo", Some(4_500_000_000)),
    ("Coruscant", Some(1_000_000_000_000)),
    ("Kamino", Some(1_000_000_000)),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut characters = Query::insert();
        characters.into_table(Characters::Table).columns([
            Characters::Name,
            Characters::Height,
            Characters::Weight,
        ]);
        for (name, height, weight) in CHARACTERS {
            characters.values_panic([(*name).into(), (*height).into(), (*weight).into()]);
        }
        manager.exec_stmt(characters).await?;

        let mut planets = Query::insert();
        planets
            .into_table(Planets::Table)
            .columns([Planets::Name, Planets::Population]);
        for (name, population) in PLANETS {
            planets.values_panic([(*name).into(), (*population).into()]);
        }
        manager.exec_stmt(planets).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<&str> = CHARACTERS.iter().map(|(name, _, _)| *name).collect();
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Characters::Table)
                    .and_where(Expr::col(Characters::Name).is_in(names))
                    .to_owned(),
            )
            .await?;

        let names: Vec<&str> = PLANETS.iter().map(|(name, _)| *name).collect();
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Planets::Table)
                    .and_where(Expr::col(Planets::Name).is_in(names))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
