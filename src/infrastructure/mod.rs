pub mod config;
pub mod embedding;
pub mod llm;
pub mod log;
pub mod reader;
pub mod vector_store;

pub use config::{
    Config, CorsConfig, EmbeddingConfig, GeminiConfig, OllamaConfig, RagConfig, ServerConfig,
};
pub use embedding::{create_provider, HashedEmbedding, RemoteEmbedding};
pub use llm::{GeminiBackend, OllamaBackend};
pub use log::{create_pool, InMemoryMessageLog, RedisMessageLog, RedisPool};
pub use reader::PlainTextReader;
pub use vector_store::{InMemoryVectorStore, QdrantVectorStore};
