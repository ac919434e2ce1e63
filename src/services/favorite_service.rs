use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, SqlErr, TransactionTrait,
};

use crate::{
    data::{CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository},
    error::{AppError, AppResult},
    middleware::actor::Actor,
    models::Favorite,
};

const ALREADY_ADDED: &str = "Favorite was already added";

/// What a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
}

impl FavoriteTarget {
    fn kind(&self) -> &'static str {
        match self {
            FavoriteTarget::Character(_) => "character",
            FavoriteTarget::Planet(_) => "planet",
        }
    }

    fn id(&self) -> i32 {
        match self {
            FavoriteTarget::Character(id) | FavoriteTarget::Planet(id) => *id,
        }
    }
}

pub async fn list_favorites<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Favorite>> {
    let favorites = FavoriteRepository::new(db)
        .all()
        .await?
        .into_iter()
        .map(Favorite::from)
        .collect();
    Ok(favorites)
}

/// Records `target` as a favorite of `actor`.
///
/// The duplicate check and the insert share one transaction; a concurrent
/// insert that slips past the check is caught by the unique index and
/// reported the same way.
pub async fn add_favorite(
    db: &DatabaseConnection,
    actor: &Actor,
    target: FavoriteTarget,
) -> AppResult<Favorite> {
    let txn = db.begin().await?;

    if UserRepository::new(&txn)
        .get_by_id(actor.user_id)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest("Unknown user".into()));
    }

    let favorites = FavoriteRepository::new(&txn);
    let existing = match target {
        FavoriteTarget::Character(id) => {
            if CharacterRepository::new(&txn).get_by_id(id).await?.is_none() {
                return Err(AppError::NotFound("Character not found".into()));
            }
            favorites.find_by_character_id(actor.user_id, id).await?
        }
        FavoriteTarget::Planet(id) => {
            if PlanetRepository::new(&txn).get_by_id(id).await?.is_none() {
                return Err(AppError::NotFound("Planet not found".into()));
            }
            favorites.find_by_planet_id(actor.user_id, id).await?
        }
    };

    if existing.is_some() {
        return Err(AppError::Conflict(ALREADY_ADDED.into()));
    }

    let created = match target {
        FavoriteTarget::Character(id) => favorites.create(actor.user_id, Some(id), None).await,
        FavoriteTarget::Planet(id) => favorites.create(actor.user_id, None, Some(id)).await,
    }
    .map_err(conflict_on_duplicate)?;

    txn.commit().await?;

    tracing::info!(
        user_id = actor.user_id,
        kind = target.kind(),
        target_id = target.id(),
        favorite_id = created.id,
        "favorite added"
    );

    Ok(Favorite::from(created))
}

/// Deletes the favorite `actor` holds for `target`.
pub async fn remove_favorite(
    db: &DatabaseConnection,
    actor: &Actor,
    target: FavoriteTarget,
) -> AppResult<()> {
    let invalid = || AppError::BadRequest(format!("Invalid {} ID", target.kind()));

    let txn = db.begin().await?;
    let favorites = FavoriteRepository::new(&txn);

    let existing = match target {
        FavoriteTarget::Character(id) => favorites.find_by_character_id(actor.user_id, id).await?,
        FavoriteTarget::Planet(id) => favorites.find_by_planet_id(actor.user_id, id).await?,
    };
    let favorite = existing.ok_or_else(invalid)?;

    let result = favorites.delete(&favorite).await?;
    if result.rows_affected == 0 {
        return Err(invalid());
    }

    txn.commit().await?;

    tracing::info!(
        user_id = actor.user_id,
        kind = target.kind(),
        target_id = target.id(),
        favorite_id = favorite.id,
        "favorite deleted"
    );

    Ok(())
}

fn conflict_on_duplicate(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(ALREADY_ADDED.into()),
        _ => AppError::OrmError(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::{insert_character, insert_planet, insert_user, setup};

    #[tokio::test]
    async fn add_twice_conflicts_without_second_row() -> anyhow::Result<()> {
        let db = setup().await?;
        let user = insert_user(&db, "luke").await?;
        insert_character(&db, 5, "Leia Organa").await?;
        let actor = Actor::new(user.id);

        let added = add_favorite(&db, &actor, FavoriteTarget::Character(5)).await?;
        assert_eq!(added.character_id, Some(5));
        assert_eq!(added.user_id, Some(user.id));

        let err = add_favorite(&db, &actor, FavoriteTarget::Character(5))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref msg) if msg == "Favorite was already added"));

        assert_eq!(list_favorites(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn add_for_missing_target_is_not_found() -> anyhow::Result<()> {
        let db = setup().await?;
        let user = insert_user(&db, "luke").await?;
        let actor = Actor::new(user.id);

        let err = add_favorite(&db, &actor, FavoriteTarget::Planet(42))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Planet not found"));
        Ok(())
    }

    #[tokio::test]
    async fn add_for_unknown_user_is_rejected() -> anyhow::Result<()> {
        let db = setup().await?;
        insert_planet(&db, 1, "Tatooine").await?;

        let err = add_favorite(&db, &Actor::new(99), FavoriteTarget::Planet(1))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Unknown user"));
        assert!(list_favorites(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn remove_reports_invalid_id_when_absent() -> anyhow::Result<()> {
        let db = setup().await?;
        let user = insert_user(&db, "luke").await?;
        insert_planet(&db, 1, "Tatooine").await?;
        let actor = Actor::new(user.id);

        add_favorite(&db, &actor, FavoriteTarget::Planet(1)).await?;
        remove_favorite(&db, &actor, FavoriteTarget::Planet(1)).await?;

        let err = remove_favorite(&db, &actor, FavoriteTarget::Planet(1))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid planet ID");

        let err = remove_favorite(&db, &actor, FavoriteTarget::Character(1))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid character ID");
        Ok(())
    }

    #[tokio::test]
    async fn add_planet_twice_conflicts() -> anyhow::Result<()> {
        let db = setup().await?;
        let user = insert_user(&db, "leia").await?;
        insert_planet(&db, 2, "Alderaan").await?;
        let actor = Actor::new(user.id);

        add_favorite(&db, &actor, FavoriteTarget::Planet(2)).await?;
        let err = add_favorite(&db, &actor, FavoriteTarget::Planet(2))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(ref msg) if msg == "Favorite was already added"));
        assert_eq!(list_favorites(&db).await?.len(), 1);
        Ok(())
    }

    /// An insert that gets past the duplicate check still hits the unique
    /// index, and that violation surfaces as the same conflict.
    #[tokio::test]
    async fn unique_violation_maps_to_conflict() -> anyhow::Result<()> {
        let db = setup().await?;
        let user = insert_user(&db, "luke").await?;
        insert_character(&db, 5, "Leia Organa").await?;
        insert_planet(&db, 1, "Tatooine").await?;
        let repo = FavoriteRepository::new(&db);

        repo.create(user.id, Some(5), None).await?;
        let err = repo
            .create(user.id, Some(5), None)
            .await
            .map_err(conflict_on_duplicate)
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref msg) if msg == ALREADY_ADDED));

        repo.create(user.id, None, Some(1)).await?;
        let err = repo
            .create(user.id, None, Some(1))
            .await
            .map_err(conflict_on_duplicate)
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref msg) if msg == ALREADY_ADDED));
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[test]
    fn unrelated_database_errors_are_not_conflicts() {
        let err = conflict_on_duplicate(DbErr::Custom("boom".into()));
        assert!(matches!(err, AppError::OrmError(_)));
    }
}
