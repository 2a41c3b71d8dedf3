//! Text-generation collaborator abstraction.
//!
//! Defines the [`TextGenerator`] trait, the tuning parameters the pipeline
//! passes on every call, and the error type. One implementation is
//! provided: [`huggingface::HuggingFaceGenerator`] over the HuggingFace
//! Inference API.
//!
//! Generation failures are always recoverable: the pipeline falls back to
//! a deterministic response and never surfaces these errors to callers.

use async_trait::async_trait;

pub mod huggingface;

/// Tuning parameters for a single generation call.
///
/// Defaults keep output bounded and near-deterministic, with a repetition
/// penalty to suppress looping output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Maximum tokens to generate.
    pub max_new_tokens: u32,
    /// Sampling temperature — low for near-deterministic output.
    pub temperature: f32,
    /// Repetition penalty.
    pub repetition_penalty: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 300,
            temperature: 0.2,
            repetition_penalty: 1.1,
        }
    }
}

/// Errors returned by text-generation backends.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// HTTP transport failure.
    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Service responded with a non-success status.
    #[error("generation service returned status {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Bounded response body.
        body: String,
    },
    /// Response did not match the expected schema.
    #[error("generation response parse error: {0}")]
    Parse(String),
}

/// External text-generation service interface.
///
/// Implementations must be `Send + Sync` so the pipeline can be shared
/// across request handlers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt. Single attempt; callers do not retry.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] on network, service, or parse failure.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerationError>;
}

/// Check HTTP response status and return the body text or a structured error.
///
/// # Errors
///
/// Returns `GenerationError::Request` on transport failure,
/// `GenerationError::HttpStatus` on non-2xx.
pub(crate) async fn check_http_response(
    response: reqwest::Response,
) -> Result<String, GenerationError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(GenerationError::HttpStatus {
            status: status.as_u16(),
            body: bounded_error_body(&body),
        });
    }
    Ok(body)
}

/// Collapse and truncate an error body so logs stay readable.
pub(crate) fn bounded_error_body(raw: &str) -> String {
    const MAX_ERROR_BODY_CHARS: usize = 256;

    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > MAX_ERROR_BODY_CHARS {
        let shortened = collapsed
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect::<String>();
        return format!("{shortened}...[truncated]");
    }
    collapsed
}
