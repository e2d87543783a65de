//! Supported model identifiers.
//!
//! The remote API accepts free-form model strings; this layer only speaks
//! to a fixed set, so the identifiers are closed enums that serialize to
//! the wire names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported chat completion models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageModel {
    /// `gpt-3.5-turbo`
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,

    /// `gpt-4-turbo`
    #[serde(rename = "gpt-4-turbo")]
    Gpt4Turbo,

    /// `gpt-4o`
    #[serde(rename = "gpt-4o")]
    Gpt4o,

    /// `gpt-4o-mini`
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
}

impl LanguageModel {
    /// The wire identifier for this model.
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageModel::Gpt35Turbo => "gpt-3.5-turbo",
            LanguageModel::Gpt4Turbo => "gpt-4-turbo",
            LanguageModel::Gpt4o => "gpt-4o",
            LanguageModel::Gpt4oMini => "gpt-4o-mini",
        }
    }
}

impl fmt::Display for LanguageModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported text embedding models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmbeddingModel {
    /// `text-embedding-3-small` (1536 dimensions by default)
    #[serde(rename = "text-embedding-3-small")]
    TextEmbedding3Small,

    /// `text-embedding-3-large` (3072 dimensions by default)
    #[serde(rename = "text-embedding-3-large")]
    TextEmbedding3Large,
}

impl EmbeddingModel {
    /// The wire identifier for this model.
    pub fn as_str(self) -> &'static str {
        match self {
            EmbeddingModel::TextEmbedding3Small => "text-embedding-3-small",
            EmbeddingModel::TextEmbedding3Large => "text-embedding-3-large",
        }
    }

    /// Default output dimension for this model.
    pub fn default_dimension(self) -> usize {
        match self {
            EmbeddingModel::TextEmbedding3Small => 1536,
            EmbeddingModel::TextEmbedding3Large => 3072,
        }
    }
}

impl fmt::Display for EmbeddingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_language_model_identifiers() {
        assert_eq!(LanguageModel::Gpt35Turbo.as_str(), "gpt-3.5-turbo");
        assert_eq!(LanguageModel::Gpt4oMini.to_string(), "gpt-4o-mini");
    }

    #[test]
    fn test_embedding_model_serializes_to_wire_name() {
        let json = serde_json::to_string(&EmbeddingModel::TextEmbedding3Small).unwrap();
        assert_eq!(json, "\"text-embedding-3-small\"");
    }

    #[test]
    fn test_embedding_model_dimensions() {
        assert_eq!(EmbeddingModel::TextEmbedding3Small.default_dimension(), 1536);
        assert_eq!(EmbeddingModel::TextEmbedding3Large.default_dimension(), 3072);
    }
}
