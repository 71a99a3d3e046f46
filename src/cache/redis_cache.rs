use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use super::{CacheError, VerificationCache, keys};

/// Redis 缓存，多个实例共享验证结果
#[derive(Clone)]
pub struct RedisCache {
    redis: Arc<RedisClient>,
}

impl RedisCache {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    pub fn open(redis_url: &str) -> Result<Self, CacheError> {
        let client = RedisClient::open(redis_url)?;
        Ok(Self::new(Arc::new(client)))
    }
}

#[async_trait]
impl VerificationCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<bool>, CacheError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let cached: Option<bool> = conn.get(keys::namespaced(key)).await?;
        Ok(cached)
    }

    async fn set(&self, key: &str, exists: bool) -> Result<(), CacheError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        // 不设置过期时间
        let _: () = conn.set(keys::namespaced(key), exists).await?;
        Ok(())
    }
}
