// 验证结果缓存
// 键为小写名称，值为是否真实存在，写入后永久有效

use async_trait::async_trait;

pub mod keys;
mod memory;
mod redis_cache;

pub use memory::MemoryCache;
pub use redis_cache::RedisCache;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// 进程共享的验证缓存，实现需支持并发调用，重复 `set` 直接覆盖
#[async_trait]
pub trait VerificationCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<bool>, CacheError>;

    async fn set(&self, key: &str, exists: bool) -> Result<(), CacheError>;
}
