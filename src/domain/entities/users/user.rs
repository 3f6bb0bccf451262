//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! MongoDB `users` 컬렉션의 문서와 1:1로 매핑됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `name`은 전체 사용자 중 유일하며(유니크 인덱스), `email`은 로그인 시
/// 조회 키로 사용됩니다. 한 번 생성되면 이 서비스에서는 삭제되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique)
    pub name: String,
    /// 사용자 이메일
    pub email: String,
    /// bcrypt 해시된 비밀번호
    ///
    /// 호출자에게 돌려주기 전에 [`User::redact_password`]로 비웁니다.
    #[serde(default)]
    pub password: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성 (ID는 저장 시 할당됨)
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password: password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 메모리 상의 비밀번호 해시를 비웁니다 (저장소에는 반영되지 않음).
    pub fn redact_password(&mut self) {
        self.password.clear();
    }
}
