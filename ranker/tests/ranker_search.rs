//! Integration tests for collection building and similarity search.
//!
//! These tests verify that:
//! - Collections report the size and configuration they were built with
//! - Self-queries rank the identical document first with score 1.0
//! - Scores match exact cosine similarity within tolerance
//! - `top_k` and `min_similarity` bound the result set

use pretty_assertions::assert_eq;
use serde_json::json;

use easy_letters_ranker::{
    DEFAULT_COLLECTION, Distance, DocumentsWithEmbeddings, Ranker, RankerError,
};

/// Two documents with fixed embeddings; cosine([0.1,0.2,0.3], [0.4,0.5,0.6])
/// is approximately 0.9746.
fn sample_documents() -> DocumentsWithEmbeddings {
    DocumentsWithEmbeddings::new(
        vec!["Document 1".to_string(), "Document 2".to_string()],
        vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]],
    )
}

#[test]
fn test_make_collection_reports_count_and_dimension() {
    let mut ranker = Ranker::new();
    ranker
        .make_collection(&sample_documents(), "test_collection")
        .unwrap();

    let info = ranker.store().get_collection("test_collection").unwrap();
    assert_eq!(info.points_count, 2);
    assert_eq!(info.vector_size, 3);
    assert_eq!(info.distance, Distance::Cosine);
}

#[test]
fn test_find_similar_ranks_exact_match_first() {
    let mut ranker = Ranker::new();
    ranker
        .make_collection(&sample_documents(), "test_collection")
        .unwrap();

    let results = ranker
        .find_similar(&vec![0.1, 0.2, 0.3], "test_collection", 2, 0.1)
        .unwrap();

    assert_eq!(results.len(), 2);

    assert_eq!(results[0].id, 0);
    assert!((results[0].score - 1.0).abs() < 1e-4);
    assert_eq!(results[0].payload, json!({"text": "Document 1"}));

    assert_eq!(results[1].id, 1);
    assert!((results[1].score - 0.9746).abs() < 1e-4);
    assert_eq!(results[1].payload, json!({"text": "Document 2"}));
}

#[test]
fn test_min_similarity_filters_low_scores() {
    let mut ranker = Ranker::new();
    let documents = DocumentsWithEmbeddings::new(
        vec!["aligned".to_string(), "orthogonal".to_string()],
        vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]],
    );
    ranker.make_collection(&documents, DEFAULT_COLLECTION).unwrap();

    let results = ranker
        .find_similar(&vec![1.0, 0.0, 0.0], DEFAULT_COLLECTION, 5, 0.5)
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 0);
    assert!(results.iter().all(|r| r.score >= 0.5));
}

#[test]
fn test_top_k_bounds_result_count() {
    let mut ranker = Ranker::new();
    let documents = DocumentsWithEmbeddings::new(
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
        vec![
            vec![1.0, 0.0, 0.0],
            vec![0.9, 0.1, 0.0],
            vec![0.8, 0.2, 0.0],
        ],
    );
    ranker.make_collection(&documents, DEFAULT_COLLECTION).unwrap();

    // All three clear the threshold; only two may come back.
    let results = ranker
        .find_similar(&vec![1.0, 0.0, 0.0], DEFAULT_COLLECTION, 2, 0.1)
        .unwrap();
    assert_eq!(results.len(), 2);

    let empty = ranker
        .find_similar(&vec![1.0, 0.0, 0.0], DEFAULT_COLLECTION, 0, 0.1)
        .unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_recreating_a_collection_fails() {
    let mut ranker = Ranker::new();
    ranker
        .make_collection(&sample_documents(), "test_collection")
        .unwrap();

    let result = ranker.make_collection(&sample_documents(), "test_collection");
    assert!(matches!(result, Err(RankerError::CollectionExists(_))));

    // The original index is untouched.
    let info = ranker.store().get_collection("test_collection").unwrap();
    assert_eq!(info.points_count, 2);
}

#[test]
fn test_failed_indexing_leaves_no_collection_behind() {
    let mut ranker = Ranker::new();
    let misaligned = DocumentsWithEmbeddings::new(
        vec!["Document 1".to_string(), "Document 2".to_string()],
        vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5]],
    );

    let result = ranker.make_collection(&misaligned, DEFAULT_COLLECTION);
    assert!(matches!(
        result,
        Err(RankerError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    ));

    // Nothing lingers: no half-populated collection under the name.
    assert!(!ranker.store().has_collection(DEFAULT_COLLECTION));

    // A corrected retry under the same name works and indexes everything.
    ranker
        .make_collection(&sample_documents(), DEFAULT_COLLECTION)
        .unwrap();
    let info = ranker.store().get_collection(DEFAULT_COLLECTION).unwrap();
    assert_eq!(info.points_count, 2);
}

#[test]
fn test_query_dimension_must_match_collection() {
    let mut ranker = Ranker::new();
    ranker
        .make_collection(&sample_documents(), DEFAULT_COLLECTION)
        .unwrap();

    let result = ranker.find_similar(&vec![0.1, 0.2], DEFAULT_COLLECTION, 5, 0.1);
    assert!(matches!(
        result,
        Err(RankerError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    ));
}
