use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::{ports::MessageLog, DomainError, Message};

/// In-process conversation log for tests and local development.
pub struct InMemoryMessageLog {
    messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageLog {
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryMessageLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageLog for InMemoryMessageLog {
    async fn append(&self, message: &Message) -> Result<(), DomainError> {
        let mut messages = self
            .messages
            .write()
            .map_err(|e| DomainError::persistence(e.to_string()))?;
        messages.push(message.clone());
        Ok(())
    }

    async fn history(&self) -> Result<Vec<Message>, DomainError> {
        let messages = self
            .messages
            .read()
            .map_err(|e| DomainError::persistence(e.to_string()))?;
        Ok(messages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageRole;

    #[tokio::test]
    async fn test_append_preserves_order_and_roles() {
        let log = InMemoryMessageLog::new();
        log.append(&Message::user("first")).await.unwrap();
        log.append(&Message::assistant("second")).await.unwrap();

        let history = log.history().await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, MessageRole::User);
        assert_eq!(history[0].content, "first");
        assert_eq!(history[1].role, MessageRole::Assistant);
        assert!(history[0].created_at <= history[1].created_at);
    }
}
