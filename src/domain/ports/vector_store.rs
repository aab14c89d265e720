use crate::domain::{errors::DomainError, Chunk, Embedding};
use async_trait::async_trait;

/// Persists chunks and answers nearest-neighbor queries under one fixed
/// distance metric for the life of the index.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Durably appends a chunk. No uniqueness constraint on content.
    async fn insert(&self, chunk: &Chunk) -> Result<(), DomainError>;

    /// Returns up to `top_k` passages ordered most-similar first. Fewer when
    /// the store holds fewer chunks; empty when the store is empty.
    async fn nearest(&self, query: &Embedding, top_k: usize) -> Result<Vec<String>, DomainError>;
}
