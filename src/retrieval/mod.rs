//! Retrieval collaborator abstractions — vector search and embeddings.
//!
//! Defines the [`Retriever`] and [`Embedder`] traits and the shared error
//! type. Implementations:
//! - [`qdrant::QdrantRetriever`] — Qdrant REST points-search
//! - [`huggingface::HuggingFaceEmbedder`] — HuggingFace feature-extraction
//!
//! Unlike generation failures, retrieval failures propagate to the
//! service boundary; they are the only errors a caller ever sees.

use async_trait::async_trait;
use serde_json::Value;

pub mod huggingface;
pub mod qdrant;

/// One scored hit from the vector index.
#[derive(Debug, Clone)]
pub struct RetrievedHit {
    /// Stable listing identifier.
    pub id: String,
    /// Similarity score.
    pub score: f32,
    /// Raw listing attributes (price, location, bedrooms, area, amenities).
    pub payload: Value,
}

/// Errors returned by the retrieval path.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// Query embedding failed.
    #[error("query embedding failed: {0}")]
    Embedding(String),
    /// HTTP transport failure.
    #[error("retrieval request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Service responded with a non-success status.
    #[error("retrieval service returned status {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Bounded response body.
        body: String,
    },
    /// Response did not match the expected schema.
    #[error("retrieval response parse error: {0}")]
    Parse(String),
}

/// Similarity-search interface over the candidate index.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Search the index for candidates matching the query text.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError`] on embedding, network, or parse failure.
    async fn search(&self, query: &str) -> Result<Vec<RetrievedHit>, RetrievalError>;
}

/// Text-embedding interface, consumed by [`Retriever`] implementations.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed text into a fixed-length vector.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError`] on network or parse failure.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RetrievalError>;
}

pub(crate) async fn check_http_response(
    response: reqwest::Response,
) -> Result<String, RetrievalError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(RetrievalError::HttpStatus {
            status: status.as_u16(),
            body: crate::generation::bounded_error_body(&body),
        });
    }
    Ok(body)
}
