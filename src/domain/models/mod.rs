//! 도메인 값 객체 모듈
//!
//! 저장소에 영속화되지 않는 값 객체들입니다.
//!
//! - `token`: JWT 클레임과 발급된 토큰
//! - `auth`: 인증 미들웨어가 요청에 심어두는 사용자 정보

pub mod auth;
pub mod token;

pub use auth::AuthenticatedUser;
pub use token::{IssuedToken, TokenClaims};
