//! Redis 캐시 클라이언트
//!
//! 값은 JSON 문자열로 직렬화하여 저장합니다. 연결은 `ConnectionManager`가
//! 관리하며 끊어지면 자동으로 재연결합니다.

use log::info;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Redis 비동기 클라이언트
///
/// ```rust,ignore
/// let cache = RedisClient::connect(&config.cache.redis_url).await?;
///
/// cache.set_with_expiry("user:email:walt@breakingbad.com", &user, 600).await?;
/// let cached: Option<User> = cache.get("user:email:walt@breakingbad.com").await?;
/// cache.delete_matching("user:email:*").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// 연결을 만들고 `PING`으로 서버 가용성을 확인합니다.
    pub async fn connect(redis_url: &str) -> Result<Self, redis::RedisError> {
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
            .map(|json| {
                serde_json::from_str(&json).map_err(|e| {
                    redis::RedisError::from((
                        redis::ErrorKind::TypeError,
                        "Deserialization failed",
                        e.to_string(),
                    ))
                })
            })
            .transpose()
    }

    pub async fn set_with_expiry<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        seconds: u64,
    ) -> Result<(), redis::RedisError> {
        let json = serde_json::to_string(value).map_err(|e| {
            redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string()))
        })?;

        let mut conn = self.manager.clone();
        conn.set_ex(key, json, seconds).await
    }

    /// 키가 없을 때만 `SET key value NX EX seconds`로 저장하고 저장 여부를 반환합니다.
    pub async fn set_if_absent_with_expiry<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        seconds: u64,
    ) -> Result<bool, redis::RedisError> {
        let json = serde_json::to_string(value).map_err(|e| {
            redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string()))
        })?;

        let mut conn = self.manager.clone();
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(json)
            .arg("NX")
            .arg("EX")
            .arg(seconds)
            .query_async(&mut conn)
            .await?;

        Ok(reply.is_some())
    }

    pub async fn del(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut conn = self.manager.clone();
        conn.del(keys).await
    }

    /// 패턴과 일치하는 키를 모두 삭제하고 삭제한 개수를 반환합니다.
    ///
    /// KEYS 명령을 사용하므로 관리자 초기화 같은 드문 작업에만 사용합니다.
    pub async fn delete_matching(&self, pattern: &str) -> Result<usize, redis::RedisError> {
        let mut conn = self.manager.clone();
        let keys: Vec<String> = conn.keys(pattern).await?;

        self.del(&keys).await?;
        Ok(keys.len())
    }
}
