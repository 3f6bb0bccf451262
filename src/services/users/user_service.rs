//! # 사용자 관리 서비스 구현
//!
//! 가입(또는 로그인)과 로그인 흐름을 조율하는 핵심 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        UserService                          │
//! │  register_or_login                    login                 │
//! │  • 세션 캐시 확인 (login:{email})     • 이메일로 조회       │
//! │  • 이름 존재 확인 → 생성 또는 조회    • 비밀번호 검증       │
//! │  • 토큰 발급 + 캐시 저장 (TTL)        • 토큰 발급           │
//! └─────────────────────────────────────────────────────────────┘
//!          │                 │                  │
//!          ▼                 ▼                  ▼
//!    SessionCache        UserStore      TokenService / PasswordService
//!     (Redis)            (MongoDB)
//! ```
//!
//! ## 세션 캐시 규칙
//!
//! - 캐시에는 액세스 토큰만 저장됩니다. 리프레시 토큰은 저장하지 않습니다.
//! - 캐시 TTL(기본 10분)은 토큰 수명(30분)과 독립적입니다.
//! - 캐시 백엔드 장애는 캐시 미스로 취급하지 않고 그대로 500으로 전파합니다.
//!
//! ## 동시성
//!
//! 서비스는 가변 상태를 가지지 않습니다. 같은 이름으로 동시에 들어온 가입은
//! 저장소의 유니크 인덱스가 하나만 통과시키고 나머지는 `ConflictError`가 됩니다.

use std::sync::Arc;
use std::time::Instant;
use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;

use crate::caching::{session_cache_key, SessionCache};
use crate::domain::dto::users::response::SessionResponse;
use crate::domain::entities::users::user::User;
use crate::errors::AppError;
use crate::repositories::users::{UserFilter, UserStore};
use crate::services::auth::{PasswordService, TokenService};

/// 사용자 관리 서비스
pub struct UserService {
    store: Arc<dyn UserStore>,
    cache: Arc<dyn SessionCache>,
    tokens: Arc<TokenService>,
    passwords: PasswordService,
    cache_ttl_seconds: u64,
}

impl UserService {
    pub fn new(
        store: Arc<dyn UserStore>,
        cache: Arc<dyn SessionCache>,
        tokens: Arc<TokenService>,
        passwords: PasswordService,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            store,
            cache,
            tokens,
            passwords,
            cache_ttl_seconds,
        }
    }

    /// 멱등적 가입 또는 로그인
    ///
    /// 1. `login:{email}` 캐시 항목이 있으면 캐시된 액세스 토큰을 그대로 돌려줍니다.
    ///    이때 만료 시각과 리프레시 토큰은 응답에 포함되지 않습니다.
    /// 2. 없으면 이름으로 존재 여부를 확인하고, 새 이름이면 해싱 후 저장,
    ///    이미 있는 이름이면 **제출된 이메일**로 사용자를 조회합니다.
    /// 3. 토큰 두 개를 발급하고 액세스 토큰을 캐시에 저장합니다.
    ///
    /// # Errors
    ///
    /// * `RedisError` - 캐시 조회/저장 실패
    /// * `NotFound` - 대상 사용자를 찾을 수 없음
    /// * `ConflictError` - 동시 가입 경쟁에서 이름 선점 실패
    /// * `InternalError` - 비밀번호 해싱 실패
    /// * `UnprocessableError` - 토큰 서명 실패
    pub async fn register_or_login(&self, name: &str, email: &str, password: &str) -> Result<SessionResponse, AppError> {
        let started = Instant::now();
        let cache_key = session_cache_key(email);

        if self.cache.exists(&cache_key).await? {
            return self.resume_cached_session(&cache_key, email).await;
        }

        let user = if self.store.exists_by_name(name).await? {
            let user = self.store.get_by_filter(&UserFilter::by_email(email)).await?;
            if user.name != name {
                warn!(
                    "이름 '{}'은(는) 이미 존재하지만 이메일 {}의 계정 이름은 '{}'입니다",
                    name, email, user.name
                );
            }
            user
        } else {
            let password_hash = self.passwords.hash(password)?;
            let id = self.store.insert(name, email, &password_hash).await?;
            info!("새 사용자 생성: {} ({})", name, id.to_hex());
            self.store.get_by_filter(&UserFilter::by_id(id.to_hex())).await?
        };

        let session = self.issue_session(user)?;

        self.cache
            .set(&cache_key, &session.access_token, self.cache_ttl_seconds)
            .await?;

        debug!("register_or_login took: {:?}", started.elapsed());
        Ok(session)
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 세션 캐시는 읽지도 쓰지도 않습니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 해당 이메일의 사용자 없음
    /// * `UnprocessableError` - 비밀번호 불일치
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionResponse, AppError> {
        let user = self.store.get_by_filter(&UserFilter::by_email(email)).await?;

        if !self.passwords.verify(&user.password, password) {
            warn!("로그인 실패 - 비밀번호 불일치: {}", email);
            return Err(AppError::UnprocessableError("failed to login".to_string()));
        }

        info!("로그인 성공: {}", email);
        self.issue_session(user)
    }

    /// 사용자 ID로 조회 (비밀번호 제거됨)
    pub async fn get_user_by_id(&self, user_id: &str) -> Result<User, AppError> {
        let mut user = self.store.get_by_filter(&UserFilter::by_id(user_id)).await?;
        user.redact_password();
        Ok(user)
    }

    async fn resume_cached_session(&self, cache_key: &str, email: &str) -> Result<SessionResponse, AppError> {
        let access_token = self.cache.get(cache_key).await?.ok_or_else(|| {
            AppError::RedisError(format!(
                "failed to retrieve access token from Redis for key '{}': key vanished",
                cache_key
            ))
        })?;

        let mut user = self.store.get_by_filter(&UserFilter::by_email(email)).await?;
        user.redact_password();

        info!("세션 캐시 적중: {}", email);
        Ok(SessionResponse::cached(user, access_token))
    }

    fn issue_session(&self, mut user: User) -> Result<SessionResponse, AppError> {
        let user_id = user
            .id
            .as_ref()
            .map(|id| id.to_hex())
            .ok_or_else(|| AppError::InternalError("stored user has no id".to_string()))?;

        let access = self.tokens.issue_access_token(&user.name, &user.email, &user_id)?;
        let refresh = self.tokens.issue_refresh_token(&user.name, &user.email, &user_id)?;

        user.redact_password();
        Ok(SessionResponse::issued(user, access, refresh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::caching::memory::InMemorySessionCache;
    use crate::config::JwtSettings;
    use crate::repositories::users::memory::InMemoryUserStore;

    const TTL: u64 = 600;

    struct Fixture {
        store: Arc<InMemoryUserStore>,
        cache: Arc<InMemorySessionCache>,
        service: UserService,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryUserStore::new());
        let cache = Arc::new(InMemorySessionCache::new());
        let service = build_service(store.clone(), cache.clone());
        Fixture { store, cache, service }
    }

    fn build_service(store: Arc<dyn UserStore>, cache: Arc<InMemorySessionCache>) -> UserService {
        UserService::new(
            store,
            cache,
            Arc::new(TokenService::new(JwtSettings::with_secret("test-secret"))),
            PasswordService::new(4),
            TTL,
        )
    }

    fn assert_no_password(session: &SessionResponse) {
        let json = serde_json::to_string(session).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$"));
    }

    #[actix_web::test]
    async fn test_new_user_gets_both_tokens() {
        let f = fixture();

        let session = f.service.register_or_login("alice", "alice@example.com", "pw").await.unwrap();

        assert_eq!(f.store.len(), 1);
        assert_eq!(session.user_data.name, "alice");
        assert_eq!(session.user_data.email, "alice@example.com");
        assert!(!session.user_data.id.is_empty());
        assert!(session.access_token_expires_at.is_some());
        assert!(session.refresh_token.is_some());
        assert!(session.refresh_token_expires_at.is_some());
        assert_ne!(session.refresh_token.as_deref(), Some(session.access_token.as_str()));
        assert_eq!(f.cache.ttl_of("login:alice@example.com"), Some(TTL));
        assert_no_password(&session);
    }

    #[actix_web::test]
    async fn test_repeat_register_reuses_cached_token() {
        let f = fixture();

        let first = f.service.register_or_login("alice", "alice@example.com", "pw").await.unwrap();
        let second = f.service.register_or_login("alice", "alice@example.com", "pw").await.unwrap();

        assert_eq!(second.access_token, first.access_token);
        assert!(second.access_token_expires_at.is_none());
        assert!(second.refresh_token.is_none());
        assert!(second.refresh_token_expires_at.is_none());
        assert_eq!(second.user_data, first.user_data);
        assert_eq!(f.store.insert_count(), 1);
        assert_eq!(f.cache.write_count(), 1);
        assert_no_password(&second);
    }

    #[actix_web::test]
    async fn test_register_after_cache_expiry_issues_new_token() {
        let f = fixture();

        let first = f.service.register_or_login("alice", "alice@example.com", "pw").await.unwrap();
        f.cache.advance(TTL);
        let second = f.service.register_or_login("alice", "alice@example.com", "pw").await.unwrap();

        assert_ne!(second.access_token, first.access_token);
        assert!(second.refresh_token.is_some());
        assert_eq!(f.store.insert_count(), 1);
        assert_eq!(f.cache.write_count(), 2);
    }

    #[actix_web::test]
    async fn test_existing_name_resolves_by_submitted_email() {
        let f = fixture();
        f.service.register_or_login("alice", "alice@example.com", "pw").await.unwrap();
        f.service.register_or_login("bob", "bob@example.com", "pw").await.unwrap();
        f.cache.advance(TTL);

        let session = f.service.register_or_login("alice", "bob@example.com", "pw").await.unwrap();

        assert_eq!(session.user_data.name, "bob");
        assert_eq!(f.store.insert_count(), 2);
    }

    #[actix_web::test]
    async fn test_existing_name_with_unknown_email_is_not_found() {
        let f = fixture();
        f.service.register_or_login("alice", "alice@example.com", "pw").await.unwrap();

        let result = f.service.register_or_login("alice", "nobody@example.com", "pw").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_cache_backend_failure_is_fatal() {
        let f = fixture();
        f.cache.fail_all();

        let result = f.service.register_or_login("alice", "alice@example.com", "pw").await;

        assert!(matches!(result, Err(AppError::RedisError(_))));
        assert_eq!(f.store.insert_count(), 0);
    }

    #[actix_web::test]
    async fn test_cache_write_failure_is_fatal() {
        let f = fixture();
        f.cache.fail_writes();

        let result = f.service.register_or_login("alice", "alice@example.com", "pw").await;

        assert!(matches!(result, Err(AppError::RedisError(_))));
        assert_eq!(f.store.insert_count(), 1);
        assert_eq!(f.cache.ttl_of("login:alice@example.com"), None);
    }

    #[actix_web::test]
    async fn test_cache_hit_without_user_is_not_found() {
        let f = fixture();
        f.cache.seed("login:ghost@example.com", "orphan-token", TTL);

        let result = f.service.register_or_login("ghost", "ghost@example.com", "pw").await;

        match result {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "user not found based on provided filters"),
            other => panic!("expected NotFound, got {:?}", other.map(|s| s.access_token)),
        }
        assert_eq!(f.store.insert_count(), 0);
    }

    #[actix_web::test]
    async fn test_cache_key_vanished_is_internal() {
        let f = fixture();
        f.service.register_or_login("alice", "alice@example.com", "pw").await.unwrap();
        f.cache.vanish_on_get();

        let result = f.service.register_or_login("alice", "alice@example.com", "pw").await;

        match result {
            Err(err @ AppError::RedisError(_)) => {
                assert_eq!(err.status_code(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
                assert!(err.message().contains("key vanished"));
            }
            other => panic!("expected RedisError, got {:?}", other.map(|s| s.access_token)),
        }
        assert_eq!(f.store.insert_count(), 1);
    }

    #[actix_web::test]
    async fn test_login_issues_tokens_without_touching_cache() {
        let f = fixture();
        f.service.register_or_login("alice", "alice@example.com", "pw").await.unwrap();
        let reads = f.cache.read_count();
        let writes = f.cache.write_count();

        let session = f.service.login("alice@example.com", "pw").await.unwrap();

        assert_eq!(session.user_data.name, "alice");
        assert!(session.access_token_expires_at.is_some());
        assert!(session.refresh_token.is_some());
        assert!(session.refresh_token_expires_at.is_some());
        assert_eq!(f.cache.read_count(), reads);
        assert_eq!(f.cache.write_count(), writes);
        assert_no_password(&session);
    }

    #[actix_web::test]
    async fn test_login_wrong_password_is_unprocessable() {
        let f = fixture();
        f.service.register_or_login("alice", "alice@example.com", "pw").await.unwrap();

        let result = f.service.login("alice@example.com", "wrong").await;

        match result {
            Err(AppError::UnprocessableError(msg)) => assert_eq!(msg, "failed to login"),
            other => panic!("expected UnprocessableError, got {:?}", other.map(|s| s.access_token)),
        }
    }

    #[actix_web::test]
    async fn test_login_unknown_email_is_not_found() {
        let f = fixture();

        let result = f.service.login("ghost@example.com", "pw").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    /// 이름 존재 확인을 항상 통과시켜 두 요청이 모두 insert까지 가도록 만드는 저장소
    struct RacingStore(Arc<InMemoryUserStore>);

    #[async_trait]
    impl UserStore for RacingStore {
        async fn insert(&self, name: &str, email: &str, password_hash: &str) -> Result<ObjectId, AppError> {
            self.0.insert(name, email, password_hash).await
        }

        async fn get_by_filter(&self, filter: &UserFilter) -> Result<User, AppError> {
            self.0.get_by_filter(filter).await
        }

        async fn exists_by_name(&self, _name: &str) -> Result<bool, AppError> {
            Ok(false)
        }
    }

    #[actix_web::test]
    async fn test_same_name_race_yields_one_user_and_one_conflict() {
        let inner = Arc::new(InMemoryUserStore::new());
        let service = build_service(
            Arc::new(RacingStore(inner.clone())),
            Arc::new(InMemorySessionCache::new()),
        );

        let (first, second) = futures_util::future::join(
            service.register_or_login("alice", "a1@example.com", "pw"),
            service.register_or_login("alice", "a2@example.com", "pw"),
        )
        .await;

        let results = [first, second];
        let created = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(AppError::ConflictError(_))))
            .count();

        assert_eq!(created, 1);
        assert_eq!(conflicts, 1);
        assert_eq!(inner.insert_count(), 1);
    }

    #[actix_web::test]
    async fn test_get_user_by_id_redacts_password() {
        let f = fixture();
        let session = f.service.register_or_login("alice", "alice@example.com", "pw").await.unwrap();

        let user = f.service.get_user_by_id(&session.user_data.id).await.unwrap();

        assert_eq!(user.name, "alice");
        assert!(user.password.is_empty());
    }
}
