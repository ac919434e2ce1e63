use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Actor used for favorite writes when a request carries no `X-User-Id`.
    pub default_user_id: Option<i32>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let default_user_id = match env::var("DEFAULT_USER_ID") {
            Ok(raw) => Some(raw.trim().parse::<i32>().map_err(|err| {
                anyhow::anyhow!("DEFAULT_USER_ID must be an integer, got {raw:?}: {err}")
            })?),
            Err(_) => None,
        };
        Ok(Self {
            port,
            database_url,
            host,
            default_user_id,
        })
    }
}
