//! OpenAI connector for embeddings and chat completions.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::Embedding;
use crate::error::{ConnectorError, Result};
use crate::model::{EmbeddingModel, LanguageModel};

/// Default base URL for the OpenAI API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the OpenAI connector.
///
/// Constructed explicitly and passed to [`OpenAiConnector::new`]; the
/// connector reads no environment variables and keeps no global state.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key sent as a bearer token.
    pub api_key: String,

    /// Base URL of the API.
    pub base_url: String,

    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Create a configuration with the default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Options for a chat completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatOptions {
    /// Sampling temperature.
    pub temperature: f32,

    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl ChatOptions {
    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            max_tokens: 512,
        }
    }
}

/// Connector for the OpenAI embeddings and chat completion endpoints.
///
/// Each call is a single round trip; there is no caching, no retry, and no
/// backoff. The connector is cheap to clone and safe to share across tasks
/// to whatever extent the underlying HTTP client is.
#[derive(Debug, Clone)]
pub struct OpenAiConnector {
    config: OpenAiConfig,

    /// HTTP client.
    client: reqwest::Client,
}

impl OpenAiConnector {
    /// Create a connector from a configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// Generate one embedding per input document, in input order.
    ///
    /// The whole batch goes out as a single request. An empty batch is
    /// rejected before touching the network.
    pub async fn embed(&self, documents: &[String], model: EmbeddingModel) -> Result<Vec<Embedding>> {
        if documents.is_empty() {
            return Err(ConnectorError::EmptyBatch);
        }

        debug!(
            "Embedding {} documents with model: {model}",
            documents.len()
        );

        let body = EmbeddingsRequest {
            input: documents,
            model,
        };

        let response = self
            .client
            .post(format!("{}/embeddings", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;

        let result: EmbeddingsResponse = response.json().await?;

        if result.data.len() != documents.len() {
            return Err(ConnectorError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                documents.len(),
                result.data.len()
            )));
        }

        // The API tags each item with its input index; order by it rather
        // than trusting response order.
        let mut data = result.data;
        data.sort_by_key(|d| d.index);
        let embeddings: Vec<Embedding> = data.into_iter().map(|d| d.embedding).collect();

        info!("Generated {} embeddings", embeddings.len());

        Ok(embeddings)
    }

    /// Generate a chat response for a single-turn user prompt.
    ///
    /// Returns the first completion choice's message text. No streaming,
    /// no multi-turn state, no tool calling.
    pub async fn chat(
        &self,
        prompt: &str,
        model: LanguageModel,
        options: ChatOptions,
    ) -> Result<String> {
        debug!(
            "Requesting chat completion with model: {model}, max_tokens: {}",
            options.max_tokens
        );

        let body = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;

        let result: ChatResponse = response.json().await?;

        let choice = result
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ConnectorError::InvalidResponse("no choices in response".to_string()))?;

        choice
            .message
            .content
            .ok_or_else(|| ConnectorError::InvalidResponse("no message content".to_string()))
    }
}

/// Map non-success statuses to connector errors.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);

        return Err(ConnectorError::RateLimited {
            retry_after_secs: retry_after,
        });
    }

    if !response.status().is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(ConnectorError::ApiRequest(format!(
            "API error: {error_text}"
        )));
    }

    Ok(response)
}

/// Request body for the embeddings endpoint.
#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    input: &'a [String],
    model: EmbeddingModel,
}

/// Response body for the embeddings endpoint.
#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
    #[allow(dead_code)]
    model: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}

/// Request body for the chat completions endpoint.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: LanguageModel,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Response body for the chat completions endpoint.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
