//! HuggingFace feature-extraction embedding backend.

use async_trait::async_trait;
use serde::Serialize;

use super::{check_http_response, Embedder, RetrievalError};

const HF_FEATURE_EXTRACTION_BASE: &str =
    "https://api-inference.huggingface.co/pipeline/feature-extraction";

/// Prefix applied to query text before embedding, matching how the index
/// was built.
const QUERY_PREFIX: &str = "Search query: ";

#[derive(Debug, Serialize)]
struct EmbedRequest {
    inputs: Vec<String>,
}

/// Embedding client for the HuggingFace feature-extraction pipeline.
#[derive(Debug, Clone)]
pub struct HuggingFaceEmbedder {
    client: reqwest::Client,
    model: String,
    api_key: Option<String>,
}

impl HuggingFaceEmbedder {
    /// Create a client for the given sentence-embedding model.
    pub fn new(model: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            model,
            api_key,
        }
    }
}

#[async_trait]
impl Embedder for HuggingFaceEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
        let url = format!("{HF_FEATURE_EXTRACTION_BASE}/{}", self.model);
        let body = EmbedRequest {
            inputs: vec![format!("{QUERY_PREFIX}{text}")],
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let body = check_http_response(response).await?;

        let vectors: Vec<Vec<f32>> = serde_json::from_str(&body)
            .map_err(|e| RetrievalError::Parse(e.to_string()))?;
        vectors
            .into_iter()
            .next()
            .ok_or_else(|| RetrievalError::Embedding("empty embedding response".to_owned()))
    }
}
