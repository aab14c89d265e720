use crate::domain::{errors::DomainError, Message};
use async_trait::async_trait;

/// Append-only record of every user/assistant exchange.
#[async_trait]
pub trait MessageLog: Send + Sync {
    async fn append(&self, message: &Message) -> Result<(), DomainError>;
    async fn history(&self) -> Result<Vec<Message>, DomainError>;
}
