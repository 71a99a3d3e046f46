use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{PokemonStore, StoreError};
use crate::routes::pokemon::Pokemon;

/// 内存存储，按插入顺序保存
#[derive(Debug, Default)]
pub struct MemoryPokemonStore {
    records: Mutex<Vec<Pokemon>>,
}

impl MemoryPokemonStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PokemonStore for MemoryPokemonStore {
    async fn all(&self) -> Result<Vec<Pokemon>, StoreError> {
        Ok(self.records.lock().await.clone())
    }

    async fn count_by_name(&self, name: &str) -> Result<i64, StoreError> {
        let records = self.records.lock().await;
        Ok(records.iter().filter(|p| p.name == name).count() as i64)
    }

    async fn insert(&self, pokemon: Pokemon) -> Result<Pokemon, StoreError> {
        let mut records = self.records.lock().await;
        // 检查与插入在同一把锁内完成
        if records.iter().any(|p| p.name == pokemon.name) {
            return Err(StoreError::Duplicate(pokemon.name));
        }
        records.push(pokemon.clone());
        Ok(pokemon)
    }
}
