//! Whole-document reads and writes keyed by storage key.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::{Row, SqlitePool};

use crate::errors::GatewayError;

/// Handle to the persisted key-value store. Cheap to clone.
#[derive(Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Raw JSON text stored under `key`.
    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, GatewayError> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get("value")))
    }

    pub async fn contains(&self, key: &str) -> Result<bool, GatewayError> {
        Ok(self.get_raw(key).await?.is_some())
    }

    /// Decode the document under `key`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, GatewayError> {
        match self.get_raw(key).await? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Decode a collection, treating a missing key as empty.
    pub async fn get_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, GatewayError> {
        Ok(self.get(key).await?.unwrap_or_default())
    }

    /// Replace the document under `key`.
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), GatewayError> {
        let text = serde_json::to_string(value)?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO kv (key, value, updated_at) VALUES (?, ?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(&text)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        tracing::debug!(key, bytes = text.len(), "Stored document");
        Ok(())
    }

    /// Write `value` only when nothing is stored under `key`. Returns whether it wrote.
    pub async fn set_if_absent<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<bool, GatewayError> {
        let text = serde_json::to_string(value)?;
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO kv (key, value, updated_at) VALUES (?, ?, ?) ON CONFLICT(key) DO NOTHING",
        )
        .bind(key)
        .bind(&text)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn remove(&self, key: &str) -> Result<(), GatewayError> {
        sqlx::query("DELETE FROM kv WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        tracing::debug!(key, "Removed document");
        Ok(())
    }
}
