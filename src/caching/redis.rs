//! Redis 캐시 클라이언트
//!
//! 값은 JSON 문자열로 저장합니다. 캐시는 조회 가속용이므로
//! 호출 측은 실패를 무시하고 원본 저장소로 대체할 수 있어야 합니다.

use log::info;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::DataStoreConfig;
use crate::errors::errors::AppResult;

fn serialization_error(message: &'static str, e: serde_json::Error) -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::TypeError, message, e.to_string()))
}

#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL`로 연결하고 PING으로 확인합니다.
    pub async fn new() -> AppResult<Self> {
        Self::connect(&DataStoreConfig::redis_url()).await
    }

    pub async fn connect(redis_url: &str) -> AppResult<Self> {
        let client = Client::open(redis_url)?;
        let mut manager = ConnectionManager::new(client).await?;

        redis::cmd("PING").query_async::<()>(&mut manager).await?;

        info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(|e| serialization_error("Deserialization failed", e))
    }

    pub async fn set_with_expiry<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        seconds: u64,
    ) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        let json = serde_json::to_string(value)
            .map_err(|e| serialization_error("Serialization failed", e))?;

        conn.set_ex(key, json, seconds).await
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.del(key).await
    }
}
