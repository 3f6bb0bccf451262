//! 테스트용 메모리 세션 캐시
//!
//! 수동으로 전진시키는 시계를 가지고 있어 TTL 만료를 실제 대기 없이 검증할 수 있습니다.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use async_trait::async_trait;

use crate::errors::AppError;
use super::session::SessionCache;

#[derive(Default)]
pub struct InMemorySessionCache {
    /// 키 → (값, 만료 시각)
    entries: Mutex<HashMap<String, (String, u64)>>,
    now: AtomicU64,
    writes: AtomicUsize,
    reads: AtomicUsize,
    failing: AtomicBool,
    failing_writes: AtomicBool,
    vanishing: AtomicBool,
}

impl InMemorySessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 가상 시계를 `seconds`만큼 전진
    pub fn advance(&self, seconds: u64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }

    /// 이후 모든 호출이 백엔드 장애로 실패하도록 설정
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// 이후 `set`만 실패하도록 설정 (조회는 정상 동작)
    pub fn fail_writes(&self) {
        self.failing_writes.store(true, Ordering::SeqCst);
    }

    /// `exists`는 항목을 보고하지만 `get`은 비어 있는 것처럼 동작하도록 설정
    pub fn vanish_on_get(&self) {
        self.vanishing.store(true, Ordering::SeqCst);
    }

    /// 사용자 저장 없이 항목을 직접 기록
    pub fn seed(&self, key: &str, value: &str, ttl_seconds: u64) {
        let expires_at = self.now.load(Ordering::SeqCst) + ttl_seconds;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), expires_at));
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// exists/get 호출 횟수
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn ttl_of(&self, key: &str) -> Option<u64> {
        let now = self.now.load(Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(_, expires_at)| expires_at - now)
    }

    fn check_backend(&self, key: &str) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::RedisError(format!(
                "failed to check Redis key existence for '{}': connection refused",
                key
            )));
        }
        Ok(())
    }

    fn live_value(&self, key: &str) -> Option<String> {
        let now = self.now.load(Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(value, _)| value.clone())
    }
}

#[async_trait]
impl SessionCache for InMemorySessionCache {
    async fn exists(&self, key: &str) -> Result<bool, AppError> {
        self.check_backend(key)?;
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.live_value(key).is_some())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.check_backend(key)?;
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.vanishing.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self.live_value(key))
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), AppError> {
        self.check_backend(key)?;
        if self.failing_writes.load(Ordering::SeqCst) {
            return Err(AppError::RedisError(format!(
                "failed to store access token in Redis for key '{}': connection reset",
                key
            )));
        }
        self.seed(key, value, ttl_seconds);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
