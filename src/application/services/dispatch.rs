use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::domain::ports::GenerationBackend;

/// Reply for a selector no backend is registered under.
pub const INVALID_MODEL_REPLY: &str = "Invalid model selection.";

/// Routes prompts to a named generation backend.
///
/// Every path returns a reply string: unknown selectors, backend failures and
/// timeouts all degrade to explanatory text instead of propagating, so a chat
/// turn always has something to show the user.
pub struct ModelDispatcher {
    backends: HashMap<String, Arc<dyn GenerationBackend>>,
    timeout: Duration,
}

impl ModelDispatcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            backends: HashMap::new(),
            timeout,
        }
    }

    pub fn register(
        mut self,
        selector: impl Into<String>,
        backend: Arc<dyn GenerationBackend>,
    ) -> Self {
        self.backends.insert(selector.into(), backend);
        self
    }

    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn dispatch(&self, selector: &str, prompt: &str) -> String {
        let Some(backend) = self.backends.get(selector) else {
            tracing::warn!(selector, "unknown model selector");
            return INVALID_MODEL_REPLY.to_string();
        };

        match tokio::time::timeout(self.timeout, backend.generate(prompt)).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                tracing::warn!(selector, error = %e, "backend failed, degrading");
                format!("The model backend failed: {e}")
            }
            Err(_) => {
                tracing::warn!(selector, timeout = ?self.timeout, "backend timed out");
                format!(
                    "The model backend did not answer within {} seconds.",
                    self.timeout.as_secs()
                )
            }
        }
    }
}
