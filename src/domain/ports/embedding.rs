use crate::domain::{errors::DomainError, Embedding};
use async_trait::async_trait;

/// Turns text into a fixed-length vector. Implementations must be
/// deterministic: the same text and model version always yield the same
/// vector, otherwise nearest-neighbor ranking is meaningless.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Embedding, DomainError>;
    fn dimension(&self) -> usize;
}
