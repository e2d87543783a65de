//! Indexing and query wrapper around the vector store.

use serde_json::json;
use tracing::info;

use crate::Embedding;
use crate::error::{RankerError, Result};
use crate::point::{Distance, Point, ScoredPoint};
use crate::store::VectorStore;

/// Collection name used when the caller has no reason to pick one.
pub const DEFAULT_COLLECTION: &str = "letters";

/// Default number of results returned by a similarity query.
pub const DEFAULT_TOP_K: usize = 5;

/// Default inclusive lower bound on returned similarity scores.
pub const DEFAULT_MIN_SIMILARITY: f32 = 0.1;

/// A batch of documents paired positionally with their embeddings.
#[derive(Debug, Clone, Default)]
pub struct DocumentsWithEmbeddings {
    /// Document texts.
    pub texts: Vec<String>,

    /// One embedding per text, same order.
    pub embeddings: Vec<Embedding>,
}

impl DocumentsWithEmbeddings {
    /// Pair texts with their embeddings.
    pub fn new(texts: Vec<String>, embeddings: Vec<Embedding>) -> Self {
        Self { texts, embeddings }
    }
}

/// Finds similar documents via an in-memory vector store.
///
/// Thin layer over [`VectorStore`]: it assigns sequential ids, wraps each
/// text into a payload, and fixes the distance metric to cosine.
#[derive(Default)]
pub struct Ranker {
    store: VectorStore,
}

impl Ranker {
    /// Create a ranker backed by an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying vector store, for inspection.
    pub fn store(&self) -> &VectorStore {
        &self.store
    }

    /// Index a batch of documents under `collection_name`.
    ///
    /// The collection's dimensionality is taken from the first embedding
    /// and its metric is cosine. Points get sequential ids starting at 0
    /// and a `{"text": ...}` payload. Not idempotent: indexing into a name
    /// that already exists fails with
    /// [`CollectionExists`](RankerError::CollectionExists).
    ///
    /// Failure leaves no trace: if any embedding has the wrong
    /// dimensionality the collection is removed again, so a corrected
    /// retry can reuse the name.
    pub fn make_collection(
        &mut self,
        documents: &DocumentsWithEmbeddings,
        collection_name: &str,
    ) -> Result<()> {
        if documents.texts.len() != documents.embeddings.len() {
            return Err(RankerError::LengthMismatch {
                texts: documents.texts.len(),
                embeddings: documents.embeddings.len(),
            });
        }

        let vector_size = documents
            .embeddings
            .first()
            .ok_or(RankerError::EmptyDocuments)?
            .len();

        let points: Vec<Point> = documents
            .texts
            .iter()
            .zip(documents.embeddings.iter())
            .enumerate()
            .map(|(idx, (text, embedding))| {
                Point::new(idx as u64, embedding.clone(), json!({ "text": text }))
            })
            .collect();

        info!(
            "Creating collection {collection_name} with {} points of size {vector_size}",
            points.len()
        );

        self.store
            .create_collection(collection_name, vector_size, Distance::Cosine)?;

        // If indexing fails the collection must not linger half-built, or a
        // corrected retry under the same name would hit CollectionExists.
        if let Err(err) = self.store.upsert(collection_name, points) {
            let _ = self.store.delete_collection(collection_name);
            return Err(err);
        }

        Ok(())
    }

    /// Return up to `top_k` indexed documents most similar to `embedding`,
    /// in descending cosine-similarity order, skipping any result scoring
    /// below `min_similarity`.
    pub fn find_similar(
        &self,
        embedding: &Embedding,
        collection_name: &str,
        top_k: usize,
        min_similarity: f32,
    ) -> Result<Vec<ScoredPoint>> {
        self.store
            .search(collection_name, embedding, top_k, min_similarity)
    }
}
