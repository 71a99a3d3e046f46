use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::cache::CacheError;
use crate::config::ConfigError;
use crate::database::StoreError;
use crate::pokeapi::VerifyError;

/// 启动阶段的错误
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("store setup failed: {0}")]
    Store(#[from] StoreError),
    #[error("cache setup failed: {0}")]
    Cache(#[from] CacheError),
    #[error("PokeAPI client setup failed: {0}")]
    Client(#[from] VerifyError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("You already caught {0}.")]
    Duplicate(String),
    #[error("Invalid Pokemon {0}.")]
    InvalidName(String),
    #[error(transparent)]
    Verify(#[from] VerifyError),
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate(name) => AppError::Duplicate(name),
            other => AppError::Store(other),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Duplicate(_) | AppError::InvalidName(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Verify(_) | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: i32,
    pub error_message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            code: status.as_u16() as i32,
            error_message: self.to_string(),
        });

        (status, body).into_response()
    }
}
