use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::entity::character::{Column, Entity as Characters, Model};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<Model>, DbErr> {
        Characters::find()
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `None` when no character has the given id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Model>, DbErr> {
        Characters::find_by_id(id).one(self.db).await
    }
}
