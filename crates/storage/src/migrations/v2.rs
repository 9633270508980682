pub const SQL: &str = r#"
CREATE TABLE IF NOT EXISTS chunk_vectors (
    point_id INTEGER PRIMARY KEY,
    doc_id TEXT NOT NULL,
    title TEXT NOT NULL,
    doc_type TEXT NOT NULL,
    chunk_index INTEGER NOT NULL,
    chunk_text TEXT NOT NULL,
    embedding BLOB NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_chunk_vectors_doc ON chunk_vectors(doc_id);
CREATE INDEX IF NOT EXISTS idx_chunk_vectors_type ON chunk_vectors(doc_type);
"#;
