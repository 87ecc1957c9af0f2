pub mod schema;

use crate::config::Config;
use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::str::FromStr;
use tracing::info;

/// Unit of work for a single request. Dropping it without `commit` rolls back.
pub type Session = Transaction<'static, Sqlite>;

pub async fn init_db(config: &Config) -> Result<SqlitePool> {
    connect(&config.database_url, config.db_max_connections).await
}

pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("invalid DATABASE_URL {database_url:?}"))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_opts)
        .await
        .context("Failed to connect to database")?;

    init_schema(&pool).await?;
    info!(database_url, max_connections, "Record store ready");

    Ok(pool)
}

/// Executes the bundled DDL one statement at a time.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    for stmt in schema::SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s)
            .execute(pool)
            .await
            .with_context(|| format!("schema statement failed: {s}"))?;
    }
    Ok(())
}

pub async fn begin(pool: &SqlitePool) -> Result<Session, sqlx::Error> {
    pool.begin().await
}

/// Liveness probe against the store.
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}
