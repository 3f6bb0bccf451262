//! 사용자 관리 서비스 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let session = user_service
//!     .register_or_login("alice", "alice@example.com", "secret")
//!     .await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
