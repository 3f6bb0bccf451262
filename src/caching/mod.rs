//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 세션 캐시를 제공합니다.
//!
//! # 주요 기능
//!
//! - Redis 통합 및 자동 재연결 (`ConnectionManager`)
//! - JSON 기반 직렬화/역직렬화
//! - TTL 기반 세션 항목 (`login:{email}` → 액세스 토큰)
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::{redis::RedisClient, session::{SessionCache, session_cache_key}};
//!
//! let cache = RedisClient::new().await?;
//! let key = session_cache_key("alice@example.com");
//! cache.set(&key, &access_token, 600).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
pub mod session;
#[cfg(test)]
pub mod memory;

pub use session::{SessionCache, session_cache_key};
