//! 테스트용 메모리 사용자 저장소
//!
//! MongoDB 유니크 인덱스와 같은 규칙(이름 중복 시 Conflict)을 따릅니다.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::users::user::User;
use crate::errors::AppError;
use super::user_repo::{UserFilter, UserStore};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
    inserts: AtomicUsize,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 성공한 insert 횟수
    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

fn matches_filter(user: &User, filter: &UserFilter) -> bool {
    filter.id.as_ref().is_none_or(|id| user.id_string().as_deref() == Some(id.as_str()))
        && filter.name.as_ref().is_none_or(|name| &user.name == name)
        && filter.email.as_ref().is_none_or(|email| &user.email == email)
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, name: &str, email: &str, password_hash: &str) -> Result<ObjectId, AppError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.name == name) {
            return Err(AppError::ConflictError(format!("user with name '{}' already exists", name)));
        }

        let id = ObjectId::new();
        let mut user = User::new(name.to_string(), email.to_string(), password_hash.to_string());
        user.id = Some(id);
        users.push(user);
        self.inserts.fetch_add(1, Ordering::SeqCst);

        Ok(id)
    }

    async fn get_by_filter(&self, filter: &UserFilter) -> Result<User, AppError> {
        filter.to_document()?;

        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| matches_filter(u, filter))
            .cloned()
            .ok_or_else(|| AppError::NotFound("user not found based on provided filters".to_string()))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, AppError> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.name == name))
    }
}
