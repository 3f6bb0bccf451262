//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 의존성을 주입받고, `main`에서 `web::Data`로 등록되어
//! 모든 워커가 공유합니다.
//!
//! # Features
//!
//! - 멱등적 가입/로그인과 세션 캐시 재사용
//! - JWT 액세스/리프레시 토큰 발급 및 검증
//! - bcrypt 비밀번호 해싱
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::{PasswordService, TokenService}, users::UserService};
//!
//! let tokens = Arc::new(TokenService::new(JwtConfig::settings()));
//! let user_service = UserService::new(store, cache, tokens, PasswordService::from_env(), 600);
//! ```

pub mod users;
pub mod auth;
