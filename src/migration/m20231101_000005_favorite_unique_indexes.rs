use sea_orm_migration::prelude::*;

use super::m20231101_000004_create_favorite_table::Favorite;

const IDX_FAVORITE_USER_CHARACTER: &str = "idx_favorite_user_character";
const IDX_FAVORITE_USER_PLANET: &str = "idx_favorite_user_planet";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_CHARACTER)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::CharacterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_PLANET)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_PLANET)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_CHARACTER)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
