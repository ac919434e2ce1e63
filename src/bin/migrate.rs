use sea_orm_migration::MigratorTrait;
use starwars_api::{
    config::AppConfig,
    db::create_orm_conn,
    migration::{Migrator, revisions},
};

/// Usage: `migrate [up | down [steps] | fresh | status]`, defaulting to `up`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "up".to_string());

    match command.as_str() {
        "up" => {
            Migrator::up(&orm, None).await?;
            println!("Migrations applied");
        }
        "down" => {
            let steps = match args.next() {
                Some(raw) => raw
                    .parse::<u32>()
                    .map_err(|err| anyhow::anyhow!("invalid step count {raw:?}: {err}"))?,
                None => 1,
            };
            Migrator::down(&orm, Some(steps)).await?;
            println!("Reverted {steps} migration(s)");
        }
        "fresh" => {
            Migrator::fresh(&orm).await?;
            println!("Schema dropped and migrations reapplied");
        }
        "status" => {
            let applied = Migrator::get_applied_migrations(&orm).await?;
            for revision in revisions() {
                let state = if applied.iter().any(|m| m.name() == revision.id) {
                    "applied"
                } else {
                    "pending"
                };
                println!(
                    "{} (down: {}) {}",
                    revision.id,
                    revision.down_revision.as_deref().unwrap_or("-"),
                    state
                );
            }
        }
        other => anyhow::bail!("unknown command {other:?}; expected up, down, fresh or status"),
    }

    Ok(())
}
