//! Persisted key-value store.
//!
//! Each storage key holds one whole JSON document (a collection or a single record),
//! mirroring the browser's local storage. SQLite is the durable medium.

mod kv;

pub use kv::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Fixed storage keys.
pub mod keys {
    /// Reserved for a registered-user directory; nothing reads it yet.
    pub const USERS: &str = "nk_users";
    pub const PROPERTIES: &str = "nk_properties";
    pub const INQUIRIES: &str = "nk_inquiries";
    pub const TENANTS: &str = "nk_tenants";
    pub const CURRENT_USER: &str = "nk_current_user";
    pub const FORUM_POSTS: &str = "nk_forum_posts";
}

/// Open the store file, creating it and its schema if missing.
pub async fn init_store(store_path: &Path) -> Result<KvStore, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = store_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", store_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    tracing::info!("Store opened at {:?}", store_path);
    Ok(KvStore::new(pool))
}

async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
