use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::entity::favorite::{ActiveModel, Column, Entity as Favorites, Model};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn all(&self) -> Result<Vec<Model>, DbErr> {
        Favorites::find().order_by_asc(Column::Id).all(self.db).await
    }

    /// Inserts a favorite owned by `user_id`.
    ///
    /// Fails with a unique constraint violation when the user already has a
    /// favorite for the same character or planet.
    pub async fn create(
        &self,
        user_id: i32,
        character_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<Model, DbErr> {
        let favorite = ActiveModel {
            user_id: ActiveValue::Set(Some(user_id)),
            character_id: ActiveValue::Set(character_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn find_by_character_id(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<Model>, DbErr> {
        Favorites::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CharacterId.eq(character_id))
            .order_by_asc(Column::Id)
            .one(self.db)
            .await
    }

    pub async fn find_by_planet_id(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<Model>, DbErr> {
        Favorites::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::PlanetId.eq(planet_id))
            .order_by_asc(Column::Id)
            .one(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK even if the row is already gone; check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, favorite: &Model) -> Result<DeleteResult, DbErr> {
        Favorites::delete_by_id(favorite.id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbErr, SqlErr, TransactionTrait};

    use super::FavoriteRepository;
    use crate::data::test_support::{insert_character, insert_planet, insert_user, setup};

    #[tokio::test]
    async fn create_then_find_by_character_id() -> Result<(), DbErr> {
        let db = setup().await?;
        let user = insert_user(&db, "luke").await?;
        insert_character(&db, 5, "Leia Organa").await?;
        let repo = FavoriteRepository::new(&db);

        let created = repo.create(user.id, Some(5), None).await?;
        let found = repo.find_by_character_id(user.id, 5).await?;

        assert_eq!(found, Some(created.clone()));
        assert_eq!(created.user_id, Some(user.id));
        assert_eq!(created.planet_id, None);
        Ok(())
    }

    /// Lookups are scoped to the owning user.
    #[tokio::test]
    async fn find_ignores_other_users_favorites() -> Result<(), DbErr> {
        let db = setup().await?;
        let luke = insert_user(&db, "luke").await?;
        let han = insert_user(&db, "han").await?;
        insert_planet(&db, 3, "Hoth").await?;
        let repo = FavoriteRepository::new(&db);

        repo.create(luke.id, None, Some(3)).await?;

        assert!(repo.find_by_planet_id(luke.id, 3).await?.is_some());
        assert!(repo.find_by_planet_id(han.id, 3).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_character_favorite_violates_unique_index() -> Result<(), DbErr> {
        let db = setup().await?;
        let user = insert_user(&db, "luke").await?;
        insert_character(&db, 5, "Leia Organa").await?;
        let repo = FavoriteRepository::new(&db);

        repo.create(user.id, Some(5), None).await?;
        let err = repo
            .create(user.id, Some(5), None)
            .await
            .expect_err("second insert should fail");

        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        ));
        assert_eq!(repo.all().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_planet_favorite_violates_unique_index() -> Result<(), DbErr> {
        let db = setup().await?;
        let user = insert_user(&db, "luke").await?;
        insert_planet(&db, 3, "Hoth").await?;
        let repo = FavoriteRepository::new(&db);

        repo.create(user.id, None, Some(3)).await?;
        let err = repo
            .create(user.id, None, Some(3))
            .await
            .expect_err("second insert should fail");

        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        ));
        assert_eq!(repo.all().await?.len(), 1);
        Ok(())
    }

    /// Character and planet favorites of one user do not collide, since the
    /// unused column is NULL.
    #[tokio::test]
    async fn character_and_planet_favorites_coexist() -> Result<(), DbErr> {
        let db = setup().await?;
        let user = insert_user(&db, "luke").await?;
        insert_character(&db, 1, "Yoda").await?;
        insert_planet(&db, 1, "Dagobah").await?;
        insert_planet(&db, 2, "Endor").await?;
        let repo = FavoriteRepository::new(&db);

        repo.create(user.id, Some(1), None).await?;
        repo.create(user.id, None, Some(1)).await?;
        repo.create(user.id, None, Some(2)).await?;

        assert_eq!(repo.all().await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_row() -> Result<(), DbErr> {
        let db = setup().await?;
        let user = insert_user(&db, "luke").await?;
        insert_character(&db, 5, "Leia Organa").await?;
        insert_character(&db, 6, "Chewbacca").await?;
        let repo = FavoriteRepository::new(&db);

        let leia = repo.create(user.id, Some(5), None).await?;
        repo.create(user.id, Some(6), None).await?;

        let result = repo.delete(&leia).await?;
        assert_eq!(result.rows_affected, 1);

        let again = repo.delete(&leia).await?;
        assert_eq!(again.rows_affected, 0);

        let remaining = repo.all().await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].character_id, Some(6));
        Ok(())
    }

    #[tokio::test]
    async fn rolled_back_insert_leaves_no_row() -> Result<(), DbErr> {
        let db = setup().await?;
        let user = insert_user(&db, "luke").await?;
        insert_character(&db, 5, "Leia Organa").await?;

        let txn = db.begin().await?;
        FavoriteRepository::new(&txn)
            .create(user.id, Some(5), None)
            .await?;
        txn.rollback().await?;

        assert!(FavoriteRepository::new(&db).all().await?.is_empty());
        Ok(())
    }
}
