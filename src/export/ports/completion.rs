//! Text-completion port used to title and summarise a session.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for completion requests.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// A language model able to complete a single prompt.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Returns the model identifier, or an empty string when unknown.
    fn model(&self) -> &str;

    /// Completes `prompt` and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError`] when the request fails.
    async fn complete(&self, prompt: &str) -> CompletionResult<String>;
}

/// Errors returned by completion adapters.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// The provider rejected or failed the request.
    #[error("completion request failed: {0}")]
    Request(String),

    /// Transport or client failure.
    #[error("completion client error: {0}")]
    Client(Arc<dyn std::error::Error + Send + Sync>),
}

impl CompletionError {
    /// Creates a request failure.
    #[must_use]
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }

    /// Wraps a client error.
    pub fn client(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Client(Arc::new(err))
    }
}
