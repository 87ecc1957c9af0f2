use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,

    // Rate limiting
    pub rate_per_min: u32,

    pub api_prefix: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", "127.0.0.1:8080"),
            database_url: var_or("DATABASE_URL", "sqlite://app.db"),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 5)?,
            rate_per_min: parse_var("RATE_PER_MIN", 1000)?,
            api_prefix: var_or("API_PREFIX", "/api"),
            log_dir: var_or("LOG_DIR", "logs"),
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{key} must be a number, got {raw:?}"))
}
