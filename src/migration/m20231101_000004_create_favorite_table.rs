use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20231101_000001_create_user_table::User, m20231101_000002_create_character_table::Character,
    m20231101_000003_create_planet_table::Planet,
};

static FK_FAVORITE_USER_ID: &str = "fk_favorite_user_id";
static FK_FAVORITE_CHARACTER_ID: &str = "fk_favorite_character_id";
static FK_FAVORITE_PLANET_ID: &str = "fk_favorite_planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline; SQLite cannot add them afterwards.
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer_null(Favorite::UserId))
                    .col(integer_null(Favorite::CharacterId))
                    .col(integer_null(Favorite::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_USER_ID)
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTER_ID)
                            .from(Favorite::Table, Favorite::CharacterId)
                            .to(Character::Table, Character::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PLANET_ID)
                            .from(Favorite::Table, Favorite::PlanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    CharacterId,
    PlanetId,
}
