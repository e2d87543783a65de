//! # Ranker
//!
//! In-memory vector search for the letter-generation workflow:
//!
//! - **VectorStore**: named collections of (vector, payload) points with
//!   cosine nearest-neighbor search
//! - **Ranker**: the thin indexing/query wrapper the workflow calls
//!
//! Everything lives in process memory for the lifetime of the store; there
//! is no persistence and no locking. Callers that index and query the same
//! collection concurrently must serialize access themselves.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use easy_letters_ranker::{DocumentsWithEmbeddings, Ranker, DEFAULT_COLLECTION};
//!
//! let mut ranker = Ranker::new();
//! ranker.make_collection(&documents, DEFAULT_COLLECTION)?;
//! let matches = ranker.find_similar(&query, DEFAULT_COLLECTION, 5, 0.1)?;
//! ```

pub mod error;
pub mod point;
pub mod ranker;
pub mod similarity;
pub mod store;

pub use error::{RankerError, Result};
pub use point::{CollectionInfo, Distance, Point, ScoredPoint};
pub use ranker::{
    DEFAULT_COLLECTION, DEFAULT_MIN_SIMILARITY, DEFAULT_TOP_K, DocumentsWithEmbeddings, Ranker,
};
pub use similarity::cosine_similarity;
pub use store::VectorStore;

/// A dense vector embedding.
pub type Embedding = Vec<f32>;
