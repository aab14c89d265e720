mod in_memory;
mod redis;

pub use in_memory::InMemoryMessageLog;
pub use redis::{create_pool, RedisMessageLog, RedisPool};
