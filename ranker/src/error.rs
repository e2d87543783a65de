//! Error types for the vector store and ranker.

use thiserror::Error;

/// Result type alias for ranker operations.
pub type Result<T> = std::result::Result<T, RankerError>;

/// Errors that can occur in the vector store and ranker.
#[derive(Error, Debug)]
pub enum RankerError {
    /// Collection already exists.
    #[error("collection already exists: {0}")]
    CollectionExists(String),

    /// Collection does not exist.
    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    /// Vector dimensionality does not match the collection's.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// No documents to index.
    #[error("cannot build a collection from zero documents")]
    EmptyDocuments,

    /// Texts and embeddings are not positionally aligned.
    #[error("misaligned input: {texts} texts but {embeddings} embeddings")]
    LengthMismatch { texts: usize, embeddings: usize },
}
