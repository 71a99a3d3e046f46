use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::{PokemonStore, StoreError};
use crate::routes::pokemon::Pokemon;

#[derive(Clone)]
pub struct PgPokemonStore {
    pool: PgPool,
}

impl PgPokemonStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 连接数据库并执行迁移
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl PokemonStore for PgPokemonStore {
    async fn all(&self) -> Result<Vec<Pokemon>, StoreError> {
        let pokemon = sqlx::query_as::<_, Pokemon>("SELECT id, name FROM pokemon")
            .fetch_all(&self.pool)
            .await?;
        Ok(pokemon)
    }

    async fn count_by_name(&self, name: &str) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pokemon WHERE name = $1")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert(&self, pokemon: Pokemon) -> Result<Pokemon, StoreError> {
        let result = sqlx::query_as::<_, Pokemon>(
            r#"
            INSERT INTO pokemon (id, name)
            VALUES ($1, $2)
            RETURNING id, name
            "#,
        )
        .bind(pokemon.id)
        .bind(&pokemon.name)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(saved) => Ok(saved),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::Duplicate(pokemon.name))
            }
            Err(e) => Err(e.into()),
        }
    }
}
