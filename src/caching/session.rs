//! 세션 캐시 계약
//!
//! 이메일별로 발급된 액세스 토큰을 기억해 두는 키-값 저장소입니다.
//! 키는 [`session_cache_key`]로 만들며 항목은 고정 TTL 후 스스로 만료됩니다.
//! 로그아웃 같은 명시적 무효화는 없습니다.

use async_trait::async_trait;
use crate::caching::redis::RedisClient;
use crate::errors::AppError;

/// 세션 캐시 키 접두어
pub const SESSION_KEY_PREFIX: &str = "login:";

/// `login:{email}` 형태의 캐시 키
pub fn session_cache_key(email: &str) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, email)
}

/// 만료 시간을 지원하는 세션 캐시
///
/// 백엔드 장애는 항상 `Err`로 올라오며, 호출자는 이를 캐시 미스로
/// 취급하지 않습니다.
#[async_trait]
pub trait SessionCache: Send + Sync {
    async fn exists(&self, key: &str) -> Result<bool, AppError>;

    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), AppError>;
}

#[async_trait]
impl SessionCache for RedisClient {
    async fn exists(&self, key: &str) -> Result<bool, AppError> {
        RedisClient::exists(self, key).await.map_err(|e| {
            AppError::RedisError(format!(
                "failed to check Redis key existence for '{}': {}",
                key, e
            ))
        })
    }

    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        RedisClient::get::<String>(self, key).await.map_err(|e| {
            AppError::RedisError(format!(
                "failed to retrieve access token from Redis for key '{}': {}",
                key, e
            ))
        })
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), AppError> {
        self.set_with_expiry(key, &value, ttl_seconds)
            .await
            .map_err(|e| {
                AppError::RedisError(format!(
                    "failed to store access token in Redis for key '{}': {}",
                    key, e
                ))
            })
    }
}
