use std::sync::Arc;
use tracing::instrument;

use crate::domain::{
    chunk_windows,
    ports::{EmbeddingService, VectorStore},
    Chunk, DomainError,
};

/// Splits raw document text into overlapping windows and indexes each one.
pub struct IngestService {
    embedding: Arc<dyn EmbeddingService>,
    vector_store: Arc<dyn VectorStore>,
    chunk_size: usize,
    overlap: usize,
}

impl IngestService {
    pub fn new(
        embedding: Arc<dyn EmbeddingService>,
        vector_store: Arc<dyn VectorStore>,
        chunk_size: usize,
        overlap: usize,
    ) -> Self {
        assert!(chunk_size > 0, "chunk_size must be positive");
        assert!(overlap < chunk_size, "overlap must be smaller than chunk_size");
        Self {
            embedding,
            vector_store,
            chunk_size,
            overlap,
        }
    }

    /// Indexes one document. Returns the number of chunks stored.
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub async fn ingest(&self, text: &str) -> Result<usize, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::empty_content("document produced no usable text"));
        }

        let windows = chunk_windows(text, self.chunk_size, self.overlap);
        let mut stored = 0;

        for window in windows {
            let embedding = self.embedding.embed(&window).await?;
            let chunk = Chunk::new(window, embedding);
            self.vector_store.insert(&chunk).await?;
            stored += 1;
        }

        tracing::debug!(chunks = stored, "document indexed");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{HashedEmbedding, InMemoryVectorStore};

    fn service(chunk_size: usize, overlap: usize) -> IngestService {
        IngestService::new(
            Arc::new(HashedEmbedding::new(64)),
            Arc::new(InMemoryVectorStore::new()),
            chunk_size,
            overlap,
        )
    }

    #[tokio::test]
    async fn test_ingest_rejects_empty_text() {
        let err = service(100, 20).ingest("   \n ").await.unwrap_err();
        assert!(matches!(err, DomainError::EmptyContent(_)));
    }

    #[tokio::test]
    async fn test_ingest_counts_stored_windows() {
        // 10 chars, window 4, step 3: starts at 0, 3, 6, 9.
        let stored = service(4, 1).ingest("abcdefghij").await.unwrap();
        assert_eq!(stored, 4);
    }

    #[tokio::test]
    async fn test_ingest_single_window_document() {
        let stored = service(1000, 100).ingest("short note").await.unwrap();
        assert_eq!(stored, 1);
    }
}
