use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::entity::user::{Column, Entity as Users, Model};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<Model>, DbErr> {
        Users::find().order_by_asc(Column::Id).all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Model>, DbErr> {
        Users::find_by_id(id).one(self.db).await
    }
}
