use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len_null(Planet::Name, 250))
                    .col(string_len_null(Planet::ImgUrl, 250))
                    .col(text_null(Planet::Description))
                    .col(big_integer_null(Planet::Population))
                    .col(integer_null(Planet::RotationPeriod))
                    .col(integer_null(Planet::OrbitalPeriod))
                    .col(integer_null(Planet::Diameter))
                    .col(string_len_null(Planet::Gravity, 250))
                    .col(string_len_null(Planet::Terrain, 250))
                    .col(integer_null(Planet::SurfaceWater))
                    .col(string_len_null(Planet::Climate, 250))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    ImgUrl,
    Description,
    Population,
    RotationPeriod,
    OrbitalPeriod,
    Diameter,
    Gravity,
    Terrain,
    SurfaceWater,
    Climate,
}
