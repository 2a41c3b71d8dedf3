//! HuggingFace Inference API text-generation backend.

use serde::{Deserialize, Serialize};

use super::{check_http_response, GenerationError, GenerationParams, TextGenerator};
use async_trait::async_trait;

const HF_INFERENCE_BASE: &str = "https://api-inference.huggingface.co/models";

/// HuggingFace text-generation request body.
#[doc(hidden)]
#[derive(Debug, Serialize)]
pub struct HfGenerateRequest<'a> {
    /// Prompt text.
    pub inputs: &'a str,
    /// Generation parameters.
    pub parameters: HfParameters,
}

/// Generation parameters in HuggingFace wire format.
#[doc(hidden)]
#[derive(Debug, Serialize)]
pub struct HfParameters {
    /// Maximum new tokens.
    pub max_new_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Repetition penalty.
    pub repetition_penalty: f32,
    /// Exclude the prompt from the returned text.
    pub return_full_text: bool,
}

/// One element of the HuggingFace text-generation response array.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct HfGenerated {
    /// Generated text.
    pub generated_text: String,
}

/// Text-generation client for the HuggingFace Inference API.
#[derive(Debug, Clone)]
pub struct HuggingFaceGenerator {
    client: reqwest::Client,
    model: String,
    api_key: Option<String>,
}

impl HuggingFaceGenerator {
    /// Create a client for the given model. The API key is optional for
    /// public models.
    pub fn new(model: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            model,
            api_key,
        }
    }
}

/// Build the wire request for a prompt and parameters.
#[doc(hidden)]
pub fn build_request<'a>(prompt: &'a str, params: &GenerationParams) -> HfGenerateRequest<'a> {
    HfGenerateRequest {
        inputs: prompt,
        parameters: HfParameters {
            max_new_tokens: params.max_new_tokens,
            temperature: params.temperature,
            repetition_penalty: params.repetition_penalty,
            return_full_text: false,
        },
    }
}

/// Parse the generated text out of a response body.
///
/// # Errors
///
/// Returns `GenerationError::Parse` if the body is not a non-empty array
/// of `{"generated_text": ...}` objects.
#[doc(hidden)]
pub fn parse_response(body: &str) -> Result<String, GenerationError> {
    let parsed: Vec<HfGenerated> =
        serde_json::from_str(body).map_err(|e| GenerationError::Parse(e.to_string()))?;
    parsed
        .into_iter()
        .next()
        .map(|g| g.generated_text)
        .ok_or_else(|| GenerationError::Parse("empty generation response".to_owned()))
}

#[async_trait]
impl TextGenerator for HuggingFaceGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerationError> {
        let url = format!("{HF_INFERENCE_BASE}/{}", self.model);
        let mut request = self.client.post(&url).json(&build_request(prompt, params));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let body = check_http_response(response).await?;
        parse_response(&body)
    }
}
