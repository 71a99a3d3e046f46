use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::PokemonStore;
use crate::error::AppError;
use crate::pokeapi::PokeApi;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pokemon {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePokemonRequest {
    pub name: String,
}

impl Pokemon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// 列出图鉴中的全部宝可梦
    pub async fn all(store: &dyn PokemonStore) -> Result<Vec<Self>, AppError> {
        Ok(store.all().await?)
    }

    /// 保存新捕获的宝可梦
    ///
    /// 先查重再验证，最后写入存储，任何一步失败都不会留下记录
    pub async fn register(
        store: &dyn PokemonStore,
        pokeapi: &PokeApi,
        name: &str,
    ) -> Result<Self, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Pokemon name must not be empty.".into()));
        }

        // 重名检查区分大小写
        if store.count_by_name(name).await? > 0 {
            return Err(AppError::Duplicate(name.to_string()));
        }

        if !pokeapi.verify_name(name).await? {
            return Err(AppError::InvalidName(name.to_string()));
        }

        let pokemon = store.insert(Pokemon::new(name)).await?;
        tracing::info!("Registered {} ({})", pokemon.name, pokemon.id);
        Ok(pokemon)
    }
}
