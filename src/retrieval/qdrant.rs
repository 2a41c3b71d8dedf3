//! Qdrant REST retriever.
//!
//! Embeds the query via the injected [`Embedder`] and runs a points
//! search against the configured collection.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{check_http_response, Embedder, RetrievalError, RetrievedHit, Retriever};
use crate::config::QdrantConfig;

/// Qdrant points-search response envelope.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Scored points.
    pub result: Vec<ScoredPoint>,
}

/// One scored point from Qdrant.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct ScoredPoint {
    /// Point identifier (string or integer).
    pub id: Value,
    /// Similarity score.
    pub score: f32,
    /// Listing payload.
    #[serde(default)]
    pub payload: Value,
}

/// Retriever over the Qdrant REST API.
pub struct QdrantRetriever {
    client: reqwest::Client,
    config: QdrantConfig,
    embedder: Arc<dyn Embedder>,
}

impl QdrantRetriever {
    /// Create a retriever for the configured collection.
    pub fn new(config: QdrantConfig, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            embedder,
        }
    }
}

/// Map a scored point into a retrieval hit.
///
/// The listing id prefers the payload's `original_id` (the id the index
/// was built from); the point id is the fallback.
#[doc(hidden)]
pub fn hit_from_point(point: ScoredPoint) -> RetrievedHit {
    let id = point
        .payload
        .get("original_id")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| match &point.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
    RetrievedHit {
        id,
        score: point.score,
        payload: point.payload,
    }
}

#[async_trait]
impl Retriever for QdrantRetriever {
    async fn search(&self, query: &str) -> Result<Vec<RetrievedHit>, RetrievalError> {
        tracing::debug!(query, collection = %self.config.collection, "qdrant search");
        let vector = self.embedder.embed(query).await?;

        let url = format!(
            "{}/collections/{}/points/search",
            self.config.url.trim_end_matches('/'),
            self.config.collection,
        );
        let body = json!({
            "vector": vector,
            "limit": self.config.limit.max(5),
            "with_payload": true,
        });

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.header("api-key", key);
        }

        let response = request.send().await?;
        let body = check_http_response(response).await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| RetrievalError::Parse(e.to_string()))?;

        Ok(parsed.result.into_iter().map(hit_from_point).collect())
    }
}
