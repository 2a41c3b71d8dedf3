//! Configuration loading and management.
//!
//! Loads configuration from `./gharkhoj.toml` (or `$GHARKHOJ_CONFIG_PATH`).
//! Environment variables override file values; file values override
//! defaults. Secret-bearing values (API keys) normally arrive through the
//! environment (a `.env` file is loaded at startup).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::generation::GenerationParams;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GharkhojConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Qdrant vector index settings.
    pub qdrant: QdrantConfig,
    /// HuggingFace inference settings.
    pub huggingface: HuggingFaceConfig,
    /// Text-generation tuning.
    pub generation: GenerationConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub bind_addr: String,
    /// Default log level when `RUST_LOG` is unset.
    pub log_level: String,
    /// Directory for rotated log files.
    pub logs_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_owned(),
            log_level: "info".to_owned(),
            logs_dir: "logs".to_owned(),
        }
    }
}

/// Qdrant vector index settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QdrantConfig {
    /// Base URL of the Qdrant instance.
    pub url: String,
    /// API key, if the instance requires one.
    pub api_key: Option<String>,
    /// Collection holding the property listings.
    pub collection: String,
    /// Number of candidates to retrieve per query.
    pub limit: usize,
}

impl Default for QdrantConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:6333".to_owned(),
            api_key: None,
            collection: "bangalore_properties".to_owned(),
            limit: 5,
        }
    }
}

/// HuggingFace inference settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HuggingFaceConfig {
    /// API key for the Inference API.
    pub api_key: Option<String>,
    /// Text-generation model name.
    pub model: String,
    /// Sentence-embedding model name.
    pub embed_model: String,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "mistralai/Mistral-7B-Instruct-v0.2".to_owned(),
            embed_model: "sentence-transformers/all-MiniLM-L6-v2".to_owned(),
        }
    }
}

/// Text-generation tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Maximum tokens to generate per response.
    pub max_new_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Repetition penalty.
    pub repetition_penalty: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            max_new_tokens: params.max_new_tokens,
            temperature: params.temperature,
            repetition_penalty: params.repetition_penalty,
        }
    }
}

impl GenerationConfig {
    /// The per-call parameters for the generation collaborator.
    pub fn params(&self) -> GenerationParams {
        GenerationParams {
            max_new_tokens: self.max_new_tokens,
            temperature: self.temperature,
            repetition_penalty: self.repetition_penalty,
        }
    }
}

impl GharkhojConfig {
    /// Load configuration with precedence: env vars > TOML file > defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, optionally from an explicit file path.
    ///
    /// With an explicit path a missing file is an error; with the default
    /// resolution a missing file just means defaults.
    ///
    /// # Errors
    ///
    /// Returns an error on unreadable or unparseable config files.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(explicit) => {
                let contents = std::fs::read_to_string(explicit).with_context(|| {
                    format!("failed to read config file {}", explicit.display())
                })?;
                Self::from_toml(&contents)?
            }
            None => Self::load_default_file()?,
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse configuration from TOML contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML does not parse.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse config TOML")
    }

    fn load_default_file() -> Result<Self> {
        let path = Self::config_path_with(|key| std::env::var(key).ok());
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), "loading config from file");
                Self::from_toml(&contents)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!("failed to read config file: {e}")),
        }
    }

    /// Resolve the config path using a custom env resolver (for testing).
    fn config_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
        if let Some(p) = env("GHARKHOJ_CONFIG_PATH") {
            return PathBuf::from(p);
        }
        PathBuf::from("gharkhoj.toml")
    }

    /// Apply environment variable overrides (env > config > defaults).
    ///
    /// Takes a resolver function for testability.
    fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("GHARKHOJ_BIND_ADDR") {
            self.server.bind_addr = v;
        }
        if let Some(v) = env("QDRANT_URL") {
            self.qdrant.url = v;
        }
        if let Some(v) = env("QDRANT_API_KEY") {
            self.qdrant.api_key = Some(v);
        }
        if let Some(v) = env("QDRANT_COLLECTION") {
            self.qdrant.collection = v;
        }
        if let Some(v) = env("HUGGINGFACE_API_KEY") {
            self.huggingface.api_key = Some(v);
        }
        if let Some(v) = env("HUGGINGFACE_MODEL_NAME") {
            self.huggingface.model = v;
        }
    }
}
