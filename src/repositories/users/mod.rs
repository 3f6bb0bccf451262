//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`]는 자격 증명 저장소의 계약이고, [`UserRepository`]는
//! MongoDB `users` 컬렉션 위의 구현입니다.

pub mod user_repo;
#[cfg(test)]
pub mod memory;

pub use user_repo::{UserFilter, UserRepository, UserStore};
