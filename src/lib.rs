//! 사용자 계정 서비스 백엔드
//!
//! 가입, 로그인, 토큰 검증을 제공하는 actix-web 기반 마이크로서비스입니다.
//!
//! # Features
//!
//! - **멱등적 가입**: 같은 이메일로 반복 가입하면 캐시된 세션 토큰을 재사용
//! - **JWT 인증**: 액세스(30분)/리프레시(72시간) 토큰, HS256 서명
//! - **MongoDB**: 사용자 데이터 저장, `name` 유니크 인덱스
//! - **Redis**: `login:{email}` 세션 캐시 (TTL 10분)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (BASE_URL_PATH 아래)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 봉투
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 가입/로그인 흐름, 토큰, 해싱
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Repositories /  │ ← UserStore, SessionCache trait
//! │    Caching      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_account_service::config::{JwtConfig, SessionConfig};
//! use user_account_service::services::{auth::{PasswordService, TokenService}, users::UserService};
//!
//! let tokens = Arc::new(TokenService::new(JwtConfig::settings()));
//! let user_service = UserService::new(
//!     user_repo,
//!     redis_client,
//!     tokens,
//!     PasswordService::from_env(),
//!     SessionConfig::cache_ttl_seconds(),
//! );
//! let session = user_service.register_or_login("alice", "alice@example.com", "secret").await?;
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
