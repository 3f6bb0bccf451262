//! # Configuration Module
//!
//! 사용자 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! 프로필별 `.env` 파일은 `main.rs`에서 먼저 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 환경, 서버, MongoDB, Redis, 비밀번호 해싱 설정
//! - [`auth_config`] - JWT 서명 키/수명, 세션 캐시 TTL 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export BASE_URL_PATH="/api"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_service"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_ACCESS_TOKEN_MINUTES="30"
//! export JWT_REFRESH_TOKEN_HOURS="72"
//!
//! # 세션 캐시
//! export SESSION_CACHE_TTL_SECONDS="600"
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
