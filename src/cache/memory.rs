use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CacheError, VerificationCache};

/// 进程内缓存，未配置 Redis 时使用
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, bool>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl VerificationCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<bool>, CacheError> {
        Ok(self.entries.read().await.get(key).copied())
    }

    async fn set(&self, key: &str, exists: bool) -> Result<(), CacheError> {
        self.entries.write().await.insert(key.to_string(), exists);
        Ok(())
    }
}
