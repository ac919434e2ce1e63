//! Ordered, reversible schema migrations.
//!
//! Each migration is identified by its name (the revision id); its
//! predecessor is the migration listed before it in [`Migrator::migrations`].

pub use sea_orm_migration::prelude::*;

mod m20231101_000001_create_user_table;
mod m20231101_000002_create_character_table;
mod m20231101_000003_create_planet_table;
mod m20231101_000004_create_favorite_table;
mod m20231101_000005_favorite_unique_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231101_000001_create_user_table::Migration),
            Box::new(m20231101_000002_create_character_table::Migration),
            Box::new(m20231101_000003_create_planet_table::Migration),
            Box::new(m20231101_000004_create_favorite_table::Migration),
            Box::new(m20231101_000005_favorite_unique_indexes::Migration),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub id: String,
    pub down_revision: Option<String>,
}

/// The revision chain, oldest first.
pub fn revisions() -> Vec<Revision> {
    let mut previous: Option<String> = None;
    Migrator::migrations()
        .iter()
        .map(|migration| {
            let id = migration.name().to_string();
            Revision {
                id: id.clone(),
                down_revision: previous.replace(id),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ::sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

    use super::*;

    async fn table_names(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
        let rows = db
            .query_all(Statement::from_string(
                db.get_database_backend(),
                "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
            ))
            .await?;
        rows.iter()
            .map(|row| row.try_get::<String>("", "name"))
            .collect()
    }

    #[test]
    fn revisions_form_a_single_chain() {
        let chain = revisions();
        assert_eq!(chain.len(), 5);
        assert_eq!(chain[0].down_revision, None);
        for pair in chain.windows(2) {
            assert_eq!(pair[1].down_revision.as_deref(), Some(pair[0].id.as_str()));
        }
        assert_eq!(chain[0].id, "m20231101_000001_create_user_table");
    }

    #[tokio::test]
    async fn up_creates_tables_and_down_removes_them() -> Result<(), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        Migrator::up(&db, None).await?;
        let tables = table_names(&db).await?;
        for table in ["character", "favorite", "planet", "user"] {
            assert!(tables.iter().any(|t| t == table), "missing table {table}");
        }

        Migrator::down(&db, None).await?;
        let tables = table_names(&db).await?;
        for table in ["character", "favorite", "planet", "user"] {
            assert!(!tables.iter().any(|t| t == table), "table {table} left behind");
        }

        Ok(())
    }

    #[tokio::test]
    async fn reverting_one_step_drops_only_the_indexes() -> Result<(), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;
        Migrator::up(&db, None).await?;

        Migrator::down(&db, Some(1)).await?;

        let pending: Vec<_> = Migrator::get_pending_migrations(&db).await?;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].name(), "m20231101_000005_favorite_unique_indexes");
        assert!(table_names(&db).await?.iter().any(|t| t == "favorite"));

        Ok(())
    }
}
