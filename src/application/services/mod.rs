mod chat;
mod context;
mod dispatch;
mod ingest;

pub use chat::{ChatOutcome, ChatService};
pub use context::{ContextService, NO_CONTEXT};
pub use dispatch::{ModelDispatcher, INVALID_MODEL_REPLY};
pub use ingest::IngestService;
