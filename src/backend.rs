//! Generative-text backend seam.
//!
//! The summarizer only needs "prompt in, text out". `GeminiBackend` talks to
//! Gemini through rstructor; tests substitute a counting mock.

use std::future::Future;
use std::time::Duration;

use crate::config::{Config, ConfigError};
use rstructor::{GeminiClient, GeminiModel, LLMClient};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("LLM request timed out after {0:?}")]
    Timeout(Duration),
    #[error("failed to build LLM client: {0}")]
    ClientSetup(String),
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// A stateless text generator: one prompt, one response.
pub trait TextBackend: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Submit a prompt and return the raw text output
    fn generate(&self, prompt: &str)
        -> impl Future<Output = Result<String, BackendError>> + Send;
}

/// Gemini backend built once at startup and shared across calls.
pub struct GeminiBackend {
    client: GeminiClient,
    model_name: String,
}

impl GeminiBackend {
    pub fn new(api_key: &str, model: &str) -> Result<Self, BackendError> {
        let client = GeminiClient::new(api_key)
            .map_err(|e| BackendError::ClientSetup(e.to_string()))?
            .model(parse_gemini_model(model));

        Ok(Self {
            client,
            model_name: model.to_string(),
        })
    }

    /// Build the client from the `[agent]` and `[api]` config sections
    pub fn from_config(config: &Config) -> Result<Self, BackendError> {
        let api_key = config.api_key()?;
        Self::new(api_key, &config.agent.model)
    }
}

impl TextBackend for GeminiBackend {
    fn name(&self) -> &str {
        &self.model_name
    }

    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        let result = self
            .client
            .generate_with_metadata(prompt)
            .await
            .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

        Ok(result.text)
    }
}

/// Parse a model string into a GeminiModel
fn parse_gemini_model(model: &str) -> GeminiModel {
    match model {
        "gemini-2.0-flash" => GeminiModel::Gemini20Flash,
        "gemini-2.5-flash" => GeminiModel::Gemini25Flash,
        "gemini-2.5-pro" => GeminiModel::Gemini25Pro,
        other => {
            tracing::warn!(model = other, "unknown Gemini model, using gemini-2.0-flash");
            GeminiModel::Gemini20Flash
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_names_are_kept() {
        assert!(matches!(
            parse_gemini_model("gemini-2.5-pro"),
            GeminiModel::Gemini25Pro
        ));
        assert!(matches!(
            parse_gemini_model("gemini-2.5-flash"),
            GeminiModel::Gemini25Flash
        ));
    }

    #[test]
    fn unknown_model_falls_back_to_flash() {
        assert!(matches!(
            parse_gemini_model("gpt-4o"),
            GeminiModel::Gemini20Flash
        ));
    }

    #[test]
    fn missing_api_key_surfaces_as_config_error() {
        let mut config = Config::default();
        config.api.gemini_key = None;
        let err = GeminiBackend::from_config(&config).err().unwrap();
        assert!(matches!(err, BackendError::ConfigError(ConfigError::MissingApiKey(_))));
    }
}
