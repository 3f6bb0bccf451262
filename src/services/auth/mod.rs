//! 인증 및 보안 서비스 모듈
//!
//! # Features
//!
//! - JWT 액세스/리프레시 토큰 발급 및 검증 ([`TokenService`])
//! - bcrypt 비밀번호 해싱 ([`PasswordService`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{PasswordService, TokenService};
//!
//! let token_service = TokenService::new(JwtConfig::settings());
//! let access = token_service.issue_access_token(&user.name, &user.email, &user_id)?;
//!
//! let hasher = PasswordService::from_env();
//! let hashed = hasher.hash("secret")?;
//! ```

pub mod password_service;
pub mod token_service;

pub use password_service::PasswordService;
pub use token_service::TokenService;
