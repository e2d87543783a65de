//! In-memory vector store with named collections.

use std::collections::HashMap;

use ordered_float::OrderedFloat;
use tracing::{debug, info};

use crate::Embedding;
use crate::error::{RankerError, Result};
use crate::point::{CollectionInfo, Distance, Point, ScoredPoint};
use crate::similarity::{cosine_similarity, normalize};

/// A single collection: fixed dimensionality, one distance metric, points
/// held in insertion order.
struct Collection {
    vector_size: usize,
    distance: Distance,
    points: Vec<Point>,
}

impl Collection {
    fn new(vector_size: usize, distance: Distance) -> Self {
        Self {
            vector_size,
            distance,
            points: Vec::new(),
        }
    }

    /// Insert a point, overwriting any existing point with the same id.
    ///
    /// Vectors are stored unit-length.
    fn upsert(&mut self, mut point: Point) -> Result<()> {
        if point.vector.len() != self.vector_size {
            return Err(RankerError::DimensionMismatch {
                expected: self.vector_size,
                actual: point.vector.len(),
            });
        }

        normalize(&mut point.vector);

        match self.points.iter_mut().find(|p| p.id == point.id) {
            Some(existing) => *existing = point,
            None => self.points.push(point),
        }

        Ok(())
    }

    fn search(
        &self,
        query: &Embedding,
        limit: usize,
        score_threshold: f32,
    ) -> Result<Vec<ScoredPoint>> {
        if query.len() != self.vector_size {
            return Err(RankerError::DimensionMismatch {
                expected: self.vector_size,
                actual: query.len(),
            });
        }

        let mut query = query.clone();
        normalize(&mut query);

        let mut scored: Vec<(OrderedFloat<f32>, &Point)> = Vec::with_capacity(self.points.len());
        for point in &self.points {
            let score = cosine_similarity(&query, &point.vector)?;
            if score >= score_threshold {
                scored.push((OrderedFloat(score), point));
            }
        }

        // Stable sort: equal scores keep insertion order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(score, point)| ScoredPoint {
                id: point.id,
                payload: point.payload.clone(),
                score: score.0,
            })
            .collect())
    }
}

/// An in-memory nearest-neighbor store.
///
/// Collections are created once, filled via [`upsert`](Self::upsert), and
/// queried many times. Everything is discarded when the store is dropped;
/// nothing touches disk.
#[derive(Default)]
pub struct VectorStore {
    collections: HashMap<String, Collection>,
}

impl VectorStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection with a fixed dimensionality and distance metric.
    ///
    /// Not idempotent: fails if a collection with the same name already
    /// exists.
    pub fn create_collection(
        &mut self,
        name: &str,
        vector_size: usize,
        distance: Distance,
    ) -> Result<()> {
        if self.collections.contains_key(name) {
            return Err(RankerError::CollectionExists(name.to_string()));
        }

        self.collections
            .insert(name.to_string(), Collection::new(vector_size, distance));
        debug!("Created collection {name} with vector size {vector_size}");

        Ok(())
    }

    /// Insert points into a collection, overwriting on id collision.
    ///
    /// The batch is all-or-nothing: a dimension mismatch anywhere in it
    /// rejects the whole batch and commits no points.
    pub fn upsert(&mut self, name: &str, points: Vec<Point>) -> Result<()> {
        let collection = self
            .collections
            .get_mut(name)
            .ok_or_else(|| RankerError::CollectionNotFound(name.to_string()))?;

        for point in &points {
            if point.vector.len() != collection.vector_size {
                return Err(RankerError::DimensionMismatch {
                    expected: collection.vector_size,
                    actual: point.vector.len(),
                });
            }
        }

        let count = points.len();
        for point in points {
            collection.upsert(point)?;
        }
        debug!("Upserted {count} points into collection {name}");

        Ok(())
    }

    /// Search a collection for the nearest neighbors of `query`.
    ///
    /// Returns up to `limit` results in descending score order, filtered to
    /// `score >= score_threshold`.
    pub fn search(
        &self,
        name: &str,
        query: &Embedding,
        limit: usize,
        score_threshold: f32,
    ) -> Result<Vec<ScoredPoint>> {
        let collection = self
            .collections
            .get(name)
            .ok_or_else(|| RankerError::CollectionNotFound(name.to_string()))?;

        collection.search(query, limit, score_threshold)
    }

    /// Report a collection's size and configuration.
    pub fn get_collection(&self, name: &str) -> Result<CollectionInfo> {
        let collection = self
            .collections
            .get(name)
            .ok_or_else(|| RankerError::CollectionNotFound(name.to_string()))?;

        Ok(CollectionInfo {
            points_count: collection.points.len(),
            vector_size: collection.vector_size,
            distance: collection.distance,
        })
    }

    /// Whether a collection with this name exists.
    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Names of all collections, in no particular order.
    pub fn collection_names(&self) -> Vec<&str> {
        self.collections.keys().map(String::as_str).collect()
    }

    /// Drop a collection and all its points.
    pub fn delete_collection(&mut self, name: &str) -> Result<()> {
        self.collections
            .remove(name)
            .map(|_| info!("Deleted collection {name}"))
            .ok_or_else(|| RankerError::CollectionNotFound(name.to_string()))
    }
}
