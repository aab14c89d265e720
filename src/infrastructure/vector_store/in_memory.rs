use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::{ports::VectorStore, Chunk, DomainError, Embedding};

/// In-memory store scanning with cosine similarity. For tests and local
/// development; the Qdrant adapter is the durable one.
pub struct InMemoryVectorStore {
    chunks: RwLock<Vec<Chunk>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self {
            chunks: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn insert(&self, chunk: &Chunk) -> Result<(), DomainError> {
        let mut store = self
            .chunks
            .write()
            .map_err(|e| DomainError::persistence(e.to_string()))?;

        store.push(chunk.clone());
        Ok(())
    }

    async fn nearest(&self, query: &Embedding, top_k: usize) -> Result<Vec<String>, DomainError> {
        let store = self
            .chunks
            .read()
            .map_err(|e| DomainError::persistence(e.to_string()))?;

        let mut scored: Vec<(&Chunk, f32)> = store
            .iter()
            .map(|chunk| (chunk, query.cosine_similarity(&chunk.embedding)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(chunk, _)| chunk.content.clone())
            .collect())
    }
}
