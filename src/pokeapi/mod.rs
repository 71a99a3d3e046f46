//! PokeAPI `pokemon` 接口的封装
//!
//! 查询结果缓存在 [`VerificationCache`] 中：2xx 记为存在，404 记为不存在，
//! 其他状态码返回 [`VerifyError::Upstream`]，不写缓存。

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};

use crate::cache::{CacheError, VerificationCache, keys};

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("Unexpected PokeAPI response: {0}")]
    Upstream(StatusCode),
    #[error("PokeAPI request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("cannot build PokeAPI url from {0}")]
    Url(String),
    #[error("verification cache unavailable: {0}")]
    Cache(#[from] CacheError),
}

pub struct PokeApi {
    client: Client,
    base_url: Url,
    cache: Arc<dyn VerificationCache>,
}

impl PokeApi {
    pub fn new(client: Client, base_url: Url, cache: Arc<dyn VerificationCache>) -> Self {
        Self {
            client,
            base_url,
            cache,
        }
    }

    /// 创建带请求超时的 HTTP 客户端
    pub fn build_client(timeout: Duration) -> Result<Client, VerifyError> {
        Ok(Client::builder().timeout(timeout).build()?)
    }

    /// 名称是真实存在的宝可梦时返回 `true`
    ///
    /// 缓存键使用小写名称，请求使用原始名称
    pub async fn verify_name(&self, name: &str) -> Result<bool, VerifyError> {
        let key = keys::verification_key(name);

        if let Some(exists) = self.cache.get(&key).await? {
            tracing::debug!("Verification cache hit: {} -> {}", key, exists);
            return Ok(exists);
        }
        tracing::debug!("Verification cache miss: {}", key);

        let res = self.fetch_pokemon(name).await?;
        let status = res.status();

        let exists = if status.is_success() {
            true
        } else if status == StatusCode::NOT_FOUND {
            false
        } else {
            tracing::warn!("Unexpected PokeAPI response for {}: {}", name, status);
            return Err(VerifyError::Upstream(status));
        };

        self.cache.set(&key, exists).await?;
        Ok(exists)
    }

    /// 从 PokeAPI 查询指定名称的宝可梦
    pub async fn fetch_pokemon(&self, name: &str) -> Result<Response, VerifyError> {
        let url = self.pokemon_url(name)?;
        tracing::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    // 名称作为单个路径段追加，特殊字符会被转义
    fn pokemon_url(&self, name: &str) -> Result<Url, VerifyError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| VerifyError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .push(name);
        Ok(url)
    }
}
