//! # Connectors
//!
//! Typed clients for the remote APIs the letter-generation workflow talks
//! to. Currently this is OpenAI only:
//!
//! - **Embeddings**: convert a batch of documents into dense vectors
//! - **Chat completions**: single-turn prompt-to-text generation
//!
//! The connector holds a configured HTTP client and nothing else. There is
//! no caching, batch splitting, or retry logic here; remote failures
//! surface to the caller as [`ConnectorError`] values.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use easy_letters_connectors::{EmbeddingModel, OpenAiConfig, OpenAiConnector};
//!
//! let connector = OpenAiConnector::new(OpenAiConfig::new("sk-..."))?;
//! let vectors = connector
//!     .embed(&documents, EmbeddingModel::TextEmbedding3Small)
//!     .await?;
//! ```

pub mod error;
pub mod model;
pub mod openai;

pub use error::{ConnectorError, Result};
pub use model::{EmbeddingModel, LanguageModel};
pub use openai::{ChatOptions, OpenAiConfig, OpenAiConnector};

/// A dense vector embedding.
pub type Embedding = Vec<f32>;
