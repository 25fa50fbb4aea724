//! Opening the SQLite store.
//!
//! Both entry points run the embedded migrations before handing the pool out,
//! so a returned pool always has the `projects` table.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};

/// Migrations compiled into the binary from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Pool sizing and lock-wait settings for a file-backed store.
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub busy_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// Open (creating if absent) the database file at `path` and apply migrations.
pub async fn connect(path: &Path, settings: &PoolSettings) -> DbErrorResult<SqlitePool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| DbError::Initialization {
            message: format!(
                "Failed to create database directory {}: {}",
                parent.display(),
                e
            ),
            location: ErrorLocation::from(Location::caller()),
        })?;
    }

    debug!(
        "Opening database {} (max_connections={}, busy_timeout={:?})",
        path.display(),
        settings.max_connections,
        settings.busy_timeout
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(settings.busy_timeout),
        )
        .await?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Single-connection in-memory store with migrations applied.
///
/// Every connection to `:memory:` is a separate database, so the pool is pinned
/// to one connection that is never recycled.
pub async fn connect_in_memory() -> DbErrorResult<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .create_if_missing(true),
        )
        .await?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Apply any pending embedded migrations. Never drops or rewrites existing tables.
pub async fn migrate(pool: &SqlitePool) -> DbErrorResult<()> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations complete");
    Ok(())
}
