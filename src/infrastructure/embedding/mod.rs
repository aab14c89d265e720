mod hashed;
mod remote;

pub use hashed::HashedEmbedding;
pub use remote::RemoteEmbedding;

use std::sync::Arc;

use crate::domain::ports::EmbeddingService;
use crate::infrastructure::config::EmbeddingConfig;

/// Builds the provider named in config. `hashed` is the default; `remote`
/// selects the hosted model.
pub fn create_provider(config: &EmbeddingConfig) -> Arc<dyn EmbeddingService> {
    match config.provider.as_str() {
        "remote" => Arc::new(RemoteEmbedding::from_config(config)),
        _ => Arc::new(HashedEmbedding::new(config.dimension)),
    }
}
