use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Config, Connection, Pool, Runtime};

use crate::domain::{ports::MessageLog, DomainError, Message};

pub type RedisPool = Pool;

pub fn create_pool(redis_url: &str) -> Result<RedisPool, DomainError> {
    let cfg = Config::from_url(redis_url);
    cfg.create_pool(Some(Runtime::Tokio1))
        .map_err(|e| DomainError::persistence(e.to_string()))
}

/// Append-only conversation log backed by a Redis list. Every user and
/// assistant message is RPUSHed as serialized JSON; nothing is ever mutated
/// or deleted.
pub struct RedisMessageLog {
    pool: RedisPool,
    key: String,
}

impl RedisMessageLog {
    pub fn new(pool: RedisPool, key: impl Into<String>) -> Self {
        Self {
            pool,
            key: key.into(),
        }
    }

    async fn conn(&self) -> Result<Connection, DomainError> {
        self.pool
            .get()
            .await
            .map_err(|e| DomainError::persistence(e.to_string()))
    }
}

#[async_trait]
impl MessageLog for RedisMessageLog {
    async fn append(&self, message: &Message) -> Result<(), DomainError> {
        let mut conn = self.conn().await?;
        let json = serde_json::to_string(message)
            .map_err(|e| DomainError::internal(e.to_string()))?;

        conn.rpush::<_, _, ()>(&self.key, json)
            .await
            .map_err(|e| DomainError::persistence(e.to_string()))
    }

    async fn history(&self) -> Result<Vec<Message>, DomainError> {
        let mut conn = self.conn().await?;
        let entries: Vec<String> = conn
            .lrange(&self.key, 0, -1)
            .await
            .map_err(|e| DomainError::persistence(e.to_string()))?;

        entries
            .iter()
            .map(|json| {
                serde_json::from_str(json).map_err(|e| DomainError::internal(e.to_string()))
            })
            .collect()
    }
}
