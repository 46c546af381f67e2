//! Provider summary agent.
//!
//! One request, one backend call, one validated result. No retries and no
//! caching; a timeout applies only when configured.

pub use crate::summary::{SummarizeRequest, SummarizeResult};

use crate::backend::{BackendError, GeminiBackend, TextBackend};
use crate::config::Config;
use crate::prompt;
use crate::summary::ValidationError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Provider details cannot be empty.")]
    EmptyInput,
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Summarizes free-text provider details through a text backend.
///
/// The backend is constructed once and owned here; the summarizer itself
/// holds no per-call state, so `summarize` may run concurrently.
pub struct ProviderSummarizer<B> {
    backend: B,
    timeout: Option<Duration>,
}

impl ProviderSummarizer<GeminiBackend> {
    /// Build a Gemini-backed summarizer from configuration
    pub fn from_config(config: &Config) -> Result<Self, BackendError> {
        let backend = GeminiBackend::from_config(config)?;
        Ok(Self::new(backend).with_timeout(config.timeout()))
    }
}

impl<B: TextBackend> ProviderSummarizer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run the summarization on the provided details
    pub async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResult, SummarizeError> {
        if request.is_blank() {
            return Err(SummarizeError::EmptyInput);
        }

        let prompt = prompt::render(request);
        tracing::debug!(
            prompt = prompt::PROMPT_NAME,
            backend = self.backend.name(),
            chars = request.provider_details.len(),
            "requesting provider summary"
        );

        let text = self.generate(&prompt).await.inspect_err(|e| {
            tracing::error!(backend = self.backend.name(), error = %e, "backend call failed");
        })?;

        let result = SummarizeResult::from_backend_text(&text).inspect_err(|e| {
            tracing::warn!(reason = %e.reason, payload = %e.payload, "rejected backend response");
        })?;

        Ok(result)
    }

    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.backend.generate(prompt))
                .await
                .map_err(|_| BackendError::Timeout(limit))?,
            None => self.backend.generate(prompt).await,
        }
    }
}
