use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::domain::{ports::EmbeddingService, DomainError, Embedding};

/// Deterministic feature-hashing embedding.
///
/// Tokens are hashed into a fixed number of buckets with a sign bit, and the
/// resulting vector is L2-normalized. Identical text always produces the
/// identical vector, which nearest-neighbor ranking depends on. Quality is
/// far below a learned model; swap in `RemoteEmbedding` for real deployments.
pub struct HashedEmbedding {
    dimension: usize,
}

impl HashedEmbedding {
    pub fn new(dimension: usize) -> Self {
        assert!(dimension > 0, "embedding dimension must be positive");
        Self { dimension }
    }

    fn bucket(&self, token: &str) -> (usize, f32) {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        let h = hasher.finish();

        let slot = (h % self.dimension as u64) as usize;
        let sign = if h & (1u64 << 63) == 0 { 1.0 } else { -1.0 };
        (slot, sign)
    }
}

#[async_trait]
impl EmbeddingService for HashedEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding, DomainError> {
        let mut vec = vec![0.0f32; self.dimension];

        for token in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let (slot, sign) = self.bucket(token);
            vec[slot] += sign;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vec {
                *x /= norm;
            }
        }

        Ok(Embedding::new(vec))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_embed_is_deterministic() {
        let provider = HashedEmbedding::new(128);
        let a = provider.embed("the same text").await.unwrap();
        let b = provider.embed("the same text").await.unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[tokio::test]
    async fn test_embed_has_requested_dimension() {
        let provider = HashedEmbedding::new(64);
        let vec = provider.embed("hello world").await.unwrap();
        assert_eq!(vec.dimension(), 64);
        assert_eq!(provider.dimension(), 64);
    }

    #[tokio::test]
    async fn test_identical_text_is_most_similar_to_itself() {
        let provider = HashedEmbedding::new(128);
        let query = provider.embed("rust ownership and borrowing").await.unwrap();
        let same = provider.embed("rust ownership and borrowing").await.unwrap();
        let other = provider.embed("french cooking techniques").await.unwrap();

        assert!(query.cosine_similarity(&same) > query.cosine_similarity(&other));
        assert!((query.cosine_similarity(&same) - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_tokenization_ignores_case_and_punctuation() {
        let provider = HashedEmbedding::new(128);
        let a = provider.embed("Hello, World!").await.unwrap();
        let b = provider.embed("hello world").await.unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }
}
