//! Local vector index over sqlite-vec's `vec_distance_cosine`.

use chief_core::{ChunkPayload, ChunkPoint, ScoredChunk};
use rusqlite::params;
use zerocopy::IntoBytes;

use super::{Storage, get_conn, log_row_error};
use crate::error::StorageError;

/// Point ids are u64 hashes; SQLite stores them bit-for-bit as i64.
const fn point_key(point_id: u64) -> i64 {
    i64::from_ne_bytes(point_id.to_ne_bytes())
}

impl Storage {
    /// Insert or overwrite chunk points in one transaction.
    pub fn upsert_points(&self, points: &[ChunkPoint]) -> Result<(), StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO chunk_vectors
                 (point_id, doc_id, title, doc_type, chunk_index, chunk_text, embedding)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for point in points {
                stmt.execute(params![
                    point_key(point.point_id),
                    point.payload.doc_id,
                    point.payload.title,
                    point.payload.doc_type,
                    point.payload.chunk_index as i64,
                    point.payload.chunk_text,
                    point.vector.as_bytes(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Nearest chunks by cosine similarity, best first.
    pub fn search_points(
        &self,
        vector: &[f32],
        doc_type: Option<&str>,
        limit: usize,
    ) -> Result<Vec<ScoredChunk>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT doc_id, title, doc_type, chunk_index, chunk_text,
                    vec_distance_cosine(embedding, ?1) AS distance
             FROM chunk_vectors
             WHERE ?2 IS NULL OR doc_type = ?2
             ORDER BY distance ASC
             LIMIT ?3",
        )?;
        let results = stmt
            .query_map(params![vector.as_bytes(), doc_type, limit as i64], |row| {
                let distance: f64 = row.get(5)?;
                Ok(ScoredChunk {
                    score: (1.0 - distance) as f32,
                    payload: ChunkPayload {
                        doc_id: row.get(0)?,
                        title: row.get(1)?,
                        doc_type: row.get(2)?,
                        chunk_index: row.get::<_, i64>(3)? as usize,
                        chunk_text: row.get(4)?,
                    },
                })
            })?
            .filter_map(log_row_error)
            .collect();
        Ok(results)
    }

    /// Remove every point of a document; returns how many were removed.
    pub fn delete_points(&self, doc_id: &str) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn.execute("DELETE FROM chunk_vectors WHERE doc_id = ?1", params![doc_id])?)
    }
}
