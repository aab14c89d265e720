//! Application layer - Use cases and orchestration.
//!
//! Services here orchestrate domain logic through the domain ports (traits)
//! rather than concrete adapters.

pub mod services;

pub use services::{
    ChatOutcome, ChatService, ContextService, IngestService, ModelDispatcher,
    INVALID_MODEL_REPLY, NO_CONTEXT,
};
