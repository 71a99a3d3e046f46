use std::sync::Arc;

use cache::{MemoryCache, RedisCache, VerificationCache};
use config::Config;
use database::{MemoryPokemonStore, PgPokemonStore, PokemonStore};
use error::StartupError;
use pokeapi::PokeApi;

pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod pokeapi;
pub mod router;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PokemonStore>,
    pub pokeapi: Arc<PokeApi>,
}

impl AppState {
    /// 根据配置创建存储、验证缓存和 PokeAPI 客户端
    pub async fn from_config(config: &Config) -> Result<Self, StartupError> {
        // 设置存储
        let store: Arc<dyn PokemonStore> = match &config.database_url {
            Some(url) => {
                tracing::info!("Using Postgres store");
                Arc::new(PgPokemonStore::connect(url, config.database_max_connections).await?)
            }
            None => {
                tracing::info!("DATABASE_URL not set, using in-memory store");
                Arc::new(MemoryPokemonStore::new())
            }
        };

        // 设置验证缓存
        let cache: Arc<dyn VerificationCache> = match &config.redis_url {
            Some(url) => {
                tracing::info!("Using Redis verification cache");
                Arc::new(RedisCache::open(url)?)
            }
            None => {
                tracing::info!("REDIS_URL not set, using in-memory verification cache");
                Arc::new(MemoryCache::new())
            }
        };

        // 设置 PokeAPI 客户端
        let client = PokeApi::build_client(config.pokeapi_timeout())?;
        let base_url = config.pokeapi_base_url()?;
        let pokeapi = Arc::new(PokeApi::new(client, base_url, cache));

        Ok(Self { store, pokeapi })
    }
}
