// 存储层
// 数据库未配置时退回到内存存储

use async_trait::async_trait;

use crate::routes::pokemon::Pokemon;

mod memory;
mod postgres;

pub use memory::MemoryPokemonStore;
pub use postgres::PgPokemonStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("a record named {0} already exists")]
    Duplicate(String),
}

#[async_trait]
pub trait PokemonStore: Send + Sync {
    /// 按存储顺序返回全部记录
    async fn all(&self) -> Result<Vec<Pokemon>, StoreError>;

    /// 名称完全相同（区分大小写）的记录数
    async fn count_by_name(&self, name: &str) -> Result<i64, StoreError>;

    /// 保存记录，名称已存在时返回 `StoreError::Duplicate`
    async fn insert(&self, pokemon: Pokemon) -> Result<Pokemon, StoreError>;
}
