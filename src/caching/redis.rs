//! # Redis 캐시 클라이언트 구현
//!
//! Redis를 백엔드로 하는 캐시 클라이언트를 제공합니다.
//! 값은 JSON으로 직렬화되어 저장되며, 모든 작업은 async/await 기반입니다.
//!
//! ## 연결 관리
//!
//! `ConnectionManager`를 사용하여 하나의 멀티플렉싱된 연결을
//! 모든 동시 요청이 공유하고, 연결이 끊기면 자동으로 재연결합니다.

use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde::{Serialize, de::DeserializeOwned};
use crate::config::RedisConfig;

/// Redis 캐시 클라이언트 래퍼
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let redis = RedisClient::new().await?;
///
/// redis.set_with_expiry("login:alice@example.com", &token, 600).await?;
/// let cached: Option<String> = redis.get("login:alice@example.com").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    /// 자동 재연결을 지원하는 멀티플렉싱 연결
    manager: ConnectionManager,
}

impl RedisClient {
    /// 새 Redis 클라이언트 인스턴스를 생성합니다.
    ///
    /// [`RedisConfig::url`]에서 서버 주소를 읽고, 생성 시 `PING`으로
    /// 서버 가용성을 확인합니다.
    ///
    /// ## 에러 케이스
    ///
    /// - Redis 서버에 연결할 수 없는 경우
    /// - 잘못된 URL 형식
    /// - 인증 실패
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Self::connect(&RedisConfig::url()).await
    }

    /// 지정한 URL로 연결합니다.
    pub async fn connect(redis_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::open(redis_url)?;
        let mut manager = client.get_connection_manager().await?;

        // 연결 테스트 - PING 명령으로 서버 가용성 확인
        redis::cmd("PING").query_async::<()>(&mut manager).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    /// 키 존재 여부를 확인합니다.
    pub async fn exists(&self, key: &str) -> Result<bool, redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.exists(key).await
    }

    /// 지정된 키에서 값을 조회합니다.
    ///
    /// ## 반환값
    ///
    /// - `Ok(Some(T))` - 키가 존재하고 역직렬화 성공
    /// - `Ok(None)` - 키가 존재하지 않음
    /// - `Err(RedisError)` - Redis 오류 또는 역직렬화 실패
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// 만료 시간과 함께 값을 저장합니다.
    ///
    /// 기존 키가 있으면 값과 TTL을 모두 덮어씁니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set_ex(key, json, seconds).await
    }
}
