//! Scripted completion model for tests and offline hosts.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

use crate::export::ports::{CompletionError, CompletionModel, CompletionResult};

/// Completion model that replays queued responses in order and records
/// every prompt it receives.
#[derive(Debug, Clone)]
pub struct ScriptedCompletionModel {
    model: String,
    state: Arc<RwLock<ScriptState>>,
}

#[derive(Debug, Default)]
struct ScriptState {
    responses: VecDeque<CompletionResult<String>>,
    prompts: Vec<String>,
}

impl ScriptedCompletionModel {
    /// Creates a model with the given identifier and no responses queued.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            state: Arc::default(),
        }
    }

    /// Queues a successful response.
    #[must_use]
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.push(Ok(response.into()));
        self
    }

    /// Queues a failed response.
    #[must_use]
    pub fn with_failure(self, error: CompletionError) -> Self {
        self.push(Err(error));
        self
    }

    /// Returns the prompts received so far, in order.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .prompts
            .clone()
    }

    fn push(&self, response: CompletionResult<String>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .responses
            .push_back(response);
    }
}

#[async_trait]
impl CompletionModel for ScriptedCompletionModel {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> CompletionResult<String> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.prompts.push(prompt.to_owned());
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::request("no scripted response left")))
    }
}
