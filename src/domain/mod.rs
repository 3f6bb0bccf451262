//! # Domain Layer Module
//!
//! 사용자 계정 서비스의 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB에 저장되는 사용자 엔티티
//! ├── dto       - 요청/응답 데이터 전송 객체
//! └── models    - 토큰 클레임, 인증된 사용자 등 값 객체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, Caching, DB)
//! ```
//!
//! ## 가입/로그인 흐름에서의 역할
//!
//! ```rust,ignore
//! use crate::domain::{RegisterUserRequest, SessionResponse};
//!
//! // 1. DTO로 입력 받기 및 검증
//! request.validate()?;
//!
//! // 2. 서비스가 User 엔티티를 조회/생성하고 토큰을 발급
//! let session: SessionResponse = user_service
//!     .register_or_login(&request.name, &request.email, &request.password)
//!     .await?;
//!
//! // 3. 응답 DTO는 비밀번호를 포함하지 않음
//! assert!(serde_json::to_value(&session)?["userData"].get("password").is_none());
//! ```
//!
//! ## 주의사항
//!
//! - `User::password`는 bcrypt 해시이며, 호출자에게 돌아가기 전에 항상 비워집니다.
//! - 응답 DTO는 camelCase로 직렬화됩니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::User;
pub use dto::{ApiResponse, LoginRequest, RegisterUserRequest, SessionResponse, UserData};
pub use models::{AuthenticatedUser, IssuedToken, TokenClaims};
