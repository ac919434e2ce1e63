use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::entity::planet::{Column, Entity as Planets, Model};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<Model>, DbErr> {
        Planets::find().order_by_asc(Column::Id).all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Model>, DbErr> {
        Planets::find_by_id(id).one(self.db).await
    }
}
