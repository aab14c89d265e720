use std::sync::Arc;
use tracing::instrument;

use crate::domain::{
    ports::{EmbeddingService, VectorStore},
    DomainError,
};

/// Returned instead of an empty string when retrieval ran but found nothing;
/// callers must treat it as "no knowledge available", not zero-length context.
pub const NO_CONTEXT: &str = "No context found.";

/// Fetches the passages most relevant to a query, when retrieval is enabled.
pub struct ContextService {
    embedding: Arc<dyn EmbeddingService>,
    vector_store: Arc<dyn VectorStore>,
    top_k: usize,
}

impl ContextService {
    pub fn new(
        embedding: Arc<dyn EmbeddingService>,
        vector_store: Arc<dyn VectorStore>,
        top_k: usize,
    ) -> Self {
        Self {
            embedding,
            vector_store,
            top_k,
        }
    }

    /// With retrieval off this is a no-op: no embedding call, no store
    /// access, empty context.
    #[instrument(skip(self, query))]
    pub async fn assemble(&self, query: &str, use_retrieval: bool) -> Result<String, DomainError> {
        if !use_retrieval {
            return Ok(String::new());
        }

        let query_vec = self.embedding.embed(query).await?;
        let passages = self.vector_store.nearest(&query_vec, self.top_k).await?;

        if passages.is_empty() {
            return Ok(NO_CONTEXT.to_string());
        }

        Ok(passages.join("\n"))
    }
}
