//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`](users::UserStore) trait에만 의존하고,
//! 실제 구현은 MongoDB 기반 [`UserRepository`](users::UserRepository)가 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserFilter, UserRepository, UserStore};
//!
//! let user_repo = UserRepository::new(database.clone());
//! user_repo.create_indexes().await?;
//! let user = user_repo.get_by_filter(&UserFilter::by_email("user@example.com")).await?;
//! ```

pub mod users;
