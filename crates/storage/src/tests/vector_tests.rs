use chief_core::{ChunkPayload, ChunkPoint};

use super::create_test_storage;
use crate::traits::VectorIndex;

fn point(doc_id: &str, doc_type: &str, idx: usize, vector: Vec<f32>) -> ChunkPoint {
    ChunkPoint::new(
        vector,
        ChunkPayload {
            doc_id: doc_id.into(),
            title: format!("{doc_id} title"),
            doc_type: doc_type.into(),
            chunk_index: idx,
            chunk_text: format!("{doc_id} chunk {idx}"),
        },
    )
}

#[test]
fn nearest_chunk_ranks_first() {
    let (storage, _dir) = create_test_storage();
    storage
        .upsert_points(&[
            point("cba", "cba", 0, vec![1.0, 0.0, 0.0]),
            point("sop", "sop", 0, vec![0.0, 1.0, 0.0]),
            point("drone", "policy", 0, vec![0.0, 0.0, 1.0]),
        ])
        .unwrap();

    let hits = storage.search_points(&[0.9, 0.1, 0.0], None, 3).unwrap();
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].payload.doc_id, "cba");
    assert!(hits[0].score > hits[1].score);
    assert!(hits[1].score >= hits[2].score);
}

#[test]
fn doc_type_filter_is_exact() {
    let (storage, _dir) = create_test_storage();
    storage
        .upsert_points(&[
            point("cba", "cba", 0, vec![1.0, 0.0]),
            point("sop", "sop", 0, vec![1.0, 0.0]),
        ])
        .unwrap();

    let hits = storage.search_points(&[1.0, 0.0], Some("sop"), 5).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].payload.doc_type, "sop");
    assert!(storage.search_points(&[1.0, 0.0], Some("so"), 5).unwrap().is_empty());
}

#[test]
fn reupserting_same_chunk_overwrites() {
    let (storage, _dir) = create_test_storage();
    storage.upsert_points(&[point("cba", "cba", 0, vec![1.0, 0.0])]).unwrap();
    storage.upsert_points(&[point("cba", "cba", 0, vec![0.0, 1.0])]).unwrap();

    let hits = storage.search_points(&[0.0, 1.0], None, 10).unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].score > 0.99);
}

#[tokio::test]
async fn delete_document_removes_all_points() {
    let (storage, _dir) = create_test_storage();
    storage
        .upsert(&[point("cba", "cba", 0, vec![1.0, 0.0]), point("cba", "cba", 1, vec![0.0, 1.0])])
        .await
        .unwrap();
    VectorIndex::delete_document(&storage, "cba").await.unwrap();
    assert!(storage.search(&[1.0, 0.0], None, 10).await.unwrap().is_empty());
}
