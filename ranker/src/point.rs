//! Point and collection metadata types.

use serde::{Deserialize, Serialize};

use crate::Embedding;

/// Distance metric used by a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distance {
    /// Cosine similarity, ranking in [-1, 1].
    Cosine,
}

/// A point to index: id, vector, and an arbitrary JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    /// Unique identifier within the collection.
    pub id: u64,

    /// The embedding vector.
    pub vector: Embedding,

    /// Associated payload.
    pub payload: serde_json::Value,
}

impl Point {
    /// Create a new point.
    pub fn new(id: u64, vector: Embedding, payload: serde_json::Value) -> Self {
        Self {
            id,
            vector,
            payload,
        }
    }
}

/// A search result: the matched point's id and payload plus its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPoint {
    /// Identifier of the matched point.
    pub id: u64,

    /// Payload stored with the point.
    pub payload: serde_json::Value,

    /// Similarity score under the collection's distance metric.
    pub score: f32,
}

/// Reported configuration and size of a collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionInfo {
    /// Number of points currently stored.
    pub points_count: usize,

    /// Vector dimensionality every point must match.
    pub vector_size: usize,

    /// Distance metric the collection ranks by.
    pub distance: Distance,
}
