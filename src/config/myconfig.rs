use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    pub run_migrations: bool,
    pub bcrypt_cost: u32,
    pub session_ttl_secs: i64,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid u32 integer")?;

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let run_migrations = match std::env::var("RUN_MIGRATIONS")
            .unwrap_or_else(|_| "false".to_string())
            .as_str()
        {
            "true" => true,
            "false" => false,
            other => {
                anyhow::bail!("RUN_MIGRATIONS must be 'true' or 'false', got '{other}'");
            }
        };

        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .context("BCRYPT_COST must be a valid u32 integer")?;

        let session_ttl_secs = std::env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<i64>()
            .context("SESSION_TTL_SECS must be a valid i64 integer")?;

        Ok(Self {
            database_url,
            db_max_connections,
            port,
            run_migrations,
            bcrypt_cost,
            session_ttl_secs,
        })
    }
}
