mod embedding;
mod generation;
mod message_log;
mod reader;
mod vector_store;

pub use embedding::EmbeddingService;
pub use generation::GenerationBackend;
pub use message_log::MessageLog;
pub use reader::DocumentReader;
pub use vector_store::VectorStore;
