//! Generic partitioned-item primitives every typed store is built on.

use chrono::Utc;
use rusqlite::{OptionalExtension as _, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Storage, get_conn, log_row_error, parse_json};
use crate::error::StorageError;

/// One row of the item table, ready to write.
pub(crate) struct ItemRow<'a> {
    pub pk: &'a str,
    pub sk: &'a str,
    pub gsi1pk: Option<String>,
    pub gsi1sk: Option<String>,
}

impl<'a> ItemRow<'a> {
    pub(crate) const fn new(pk: &'a str, sk: &'a str) -> Self {
        Self { pk, sk, gsi1pk: None, gsi1sk: None }
    }

    pub(crate) fn indexed(mut self, gsi1pk: String, gsi1sk: String) -> Self {
        self.gsi1pk = Some(gsi1pk);
        self.gsi1sk = Some(gsi1sk);
        self
    }
}

pub(crate) fn put_with(
    conn: &rusqlite::Connection,
    row: &ItemRow<'_>,
    value: &impl Serialize,
) -> Result<(), StorageError> {
    let data = serde_json::to_string(value)?;
    conn.execute(
        "INSERT OR REPLACE INTO items (pk, sk, gsi1pk, gsi1sk, data, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![row.pk, row.sk, row.gsi1pk, row.gsi1sk, data, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

impl Storage {
    /// Insert or overwrite one item.
    pub(crate) fn put_item(
        &self,
        row: &ItemRow<'_>,
        value: &impl Serialize,
    ) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        put_with(&conn, row, value)
    }

    pub(crate) fn get_item<T: DeserializeOwned>(
        &self,
        pk: &str,
        sk: &str,
    ) -> Result<Option<T>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let data: Option<String> = conn
            .query_row(
                "SELECT data FROM items WHERE pk = ?1 AND sk = ?2",
                params![pk, sk],
                |row| row.get(0),
            )
            .optional()?;
        data.map(|d| serde_json::from_str(&d)).transpose().map_err(StorageError::from)
    }

    /// Items in partition `pk` whose sort key starts with `sk_prefix`, by sort key.
    pub(crate) fn query_partition<T: DeserializeOwned>(
        &self,
        pk: &str,
        sk_prefix: &str,
    ) -> Result<Vec<T>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT data FROM items
             WHERE pk = ?1 AND substr(sk, 1, length(?2)) = ?2
             ORDER BY sk",
        )?;
        let results = stmt
            .query_map(params![pk, sk_prefix], |row| parse_json(&row.get::<_, String>(0)?))?
            .filter_map(log_row_error)
            .collect();
        Ok(results)
    }

    /// Items whose partition key starts with `pk_prefix` and whose sort key is `sk`.
    pub(crate) fn scan_prefix<T: DeserializeOwned>(
        &self,
        pk_prefix: &str,
        sk: &str,
    ) -> Result<Vec<T>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT data FROM items
             WHERE substr(pk, 1, length(?1)) = ?1 AND sk = ?2
             ORDER BY pk",
        )?;
        let results = stmt
            .query_map(params![pk_prefix, sk], |row| parse_json(&row.get::<_, String>(0)?))?
            .filter_map(log_row_error)
            .collect();
        Ok(results)
    }

    /// Secondary-index query restricted to one entity type, by `gsi1sk`.
    pub(crate) fn query_index<T: DeserializeOwned>(
        &self,
        gsi1pk: &str,
        pk_prefix: &str,
        sk: Option<&str>,
    ) -> Result<Vec<T>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT data FROM items
             WHERE gsi1pk = ?1
               AND substr(pk, 1, length(?2)) = ?2
               AND (?3 IS NULL OR sk = ?3)
             ORDER BY gsi1sk, pk",
        )?;
        let results = stmt
            .query_map(params![gsi1pk, pk_prefix, sk], |row| parse_json(&row.get::<_, String>(0)?))?
            .filter_map(log_row_error)
            .collect();
        Ok(results)
    }

    /// Returns `true` if a row was deleted.
    pub(crate) fn delete_item(&self, pk: &str, sk: &str) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let deleted = conn.execute("DELETE FROM items WHERE pk = ?1 AND sk = ?2", params![pk, sk])?;
        Ok(deleted > 0)
    }
}
