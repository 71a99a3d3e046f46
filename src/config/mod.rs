use std::env;
use std::time::Duration;

use reqwest::Url;

pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid POKEAPI_BASE_URL {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// 未设置时使用内存存储
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// 未设置时使用内存缓存
    pub redis_url: Option<String>,
    pub pokeapi_base_url: String,
    pub pokeapi_timeout_secs: u64,
    pub server_host: String,
    pub server_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            database_max_connections: 10,
            redis_url: None,
            pokeapi_base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            pokeapi_timeout_secs: 10,
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源构建配置，`from_env` 使用进程环境变量
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Config {
            database_url: non_empty("DATABASE_URL"),
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                non_empty("DATABASE_MAX_CONNECTIONS"),
                defaults.database_max_connections,
            )?,
            redis_url: non_empty("REDIS_URL"),
            pokeapi_base_url: non_empty("POKEAPI_BASE_URL")
                .unwrap_or(defaults.pokeapi_base_url),
            pokeapi_timeout_secs: parse_or(
                "POKEAPI_TIMEOUT_SECS",
                non_empty("POKEAPI_TIMEOUT_SECS"),
                defaults.pokeapi_timeout_secs,
            )?,
            server_host: non_empty("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_or(
                "SERVER_PORT",
                non_empty("SERVER_PORT"),
                defaults.server_port,
            )?,
        };

        config.pokeapi_base_url()?;
        Ok(config)
    }

    pub fn pokeapi_base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.pokeapi_base_url)
            .map_err(|_| ConfigError::InvalidBaseUrl(self.pokeapi_base_url.clone()))?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl(self.pokeapi_base_url.clone()));
        }
        Ok(url)
    }

    pub fn pokeapi_timeout(&self) -> Duration {
        Duration::from_secs(self.pokeapi_timeout_secs)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: v }),
        None => Ok(default),
    }
}
