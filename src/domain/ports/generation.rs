use crate::domain::errors::DomainError;
use async_trait::async_trait;

/// A text-generation backend. `Ok` carries the reply (which may itself be a
/// degraded diagnostic string for recoverable backend conditions); `Err` is
/// reserved for transport or launch failures the dispatcher turns into an
/// explanatory reply.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}
