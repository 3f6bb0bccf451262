//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **유일성 보장**: `name` 필드의 유니크 인덱스가 동시 가입 경쟁의 최종 판정자
//! - **필터 조회**: id/name/email 중 주어진 필드를 AND로 결합해 한 건 조회
//! - **캐싱 없음**: 세션 캐시는 서비스 계층에서만 다룹니다

use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::AppError,
};

/// 사용자 컬렉션 이름
pub const USER_COLLECTION: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 조회 필터
///
/// 설정된 필드만 조건에 포함되며 모두 AND로 결합됩니다.
/// 아무 필드도 없으면 조회는 `ValidationError`로 거부됩니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserFilter {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Self::default() }
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self { email: Some(email.into()), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none() && self.email.is_none()
    }

    /// MongoDB 쿼리 문서로 변환
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 필터가 비었거나 id가 ObjectId 형식이 아님
    pub fn to_document(&self) -> Result<Document, AppError> {
        if self.is_empty() {
            return Err(AppError::ValidationError(
                "at least one filter (user_id, name, or email) must be provided".to_string(),
            ));
        }

        let mut filter = Document::new();

        if let Some(id) = &self.id {
            let object_id = ObjectId::parse_str(id)
                .map_err(|_| AppError::ValidationError(format!("invalid user id: {}", id)))?;
            filter.insert("_id", object_id);
        }
        if let Some(name) = &self.name {
            filter.insert("name", name.as_str());
        }
        if let Some(email) = &self.email {
            filter.insert("email", email.as_str());
        }

        Ok(filter)
    }
}

/// 자격 증명 저장소 계약
///
/// 서비스 계층은 이 trait만 알고 있으며, 테스트에서는 메모리 구현으로 대체됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 할당된 ID를 반환합니다.
    ///
    /// 이미 같은 이름이 있으면 `ConflictError`를 반환합니다.
    async fn insert(&self, name: &str, email: &str, password_hash: &str) -> Result<ObjectId, AppError>;

    /// 필터에 맞는 사용자 한 명을 조회합니다.
    ///
    /// 없으면 `NotFound`, 필터가 비었으면 `ValidationError`입니다.
    async fn get_by_filter(&self, filter: &UserFilter) -> Result<User, AppError>;

    /// 주어진 이름의 사용자가 존재하는지 확인합니다.
    async fn exists_by_name(&self, name: &str) -> Result<bool, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// ## 인덱스
///
/// - `name_unique`: `name` 오름차순, UNIQUE
/// - `email_idx`: `email` 오름차순 (로그인 조회용)
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USER_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    /// 이미 중복된 이름이 저장되어 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("name_unique".to_string())
                .build())
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .name("email_idx".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([name_index, email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("사용자 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

/// 중복 키 쓰기 에러 여부
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, name: &str, email: &str, password_hash: &str) -> Result<ObjectId, AppError> {
        let user = User::new(name.to_string(), email.to_string(), password_hash.to_string());

        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError(format!("user with name '{}' already exists", name))
                } else {
                    AppError::DatabaseError(format!("failed to insert user: {}", e))
                }
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("inserted id is not an ObjectId".to_string())
        })?;

        debug!("사용자 저장 완료: {} ({})", name, id.to_hex());
        Ok(id)
    }

    async fn get_by_filter(&self, filter: &UserFilter) -> Result<User, AppError> {
        let query = filter.to_document()?;

        self.collection()
            .find_one(query)
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to get user: {}", e)))?
            .ok_or_else(|| AppError::NotFound("user not found based on provided filters".to_string()))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, AppError> {
        let count = self.collection()
            .count_documents(doc! { "name": name })
            .limit(1)
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to check user existence: {}", e)))?;

        Ok(count > 0)
    }
}
