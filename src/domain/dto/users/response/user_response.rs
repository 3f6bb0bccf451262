use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;
use crate::domain::models::token::IssuedToken;

/// bson 시각을 chrono `DateTime<Utc>`로 변환
fn to_utc(dt: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}

/// 응답에 노출되는 사용자 정보
///
/// 비밀번호 필드는 아예 존재하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            created_at: to_utc(created_at),
            updated_at: to_utc(updated_at),
        }
    }
}

/// 가입/로그인 결과 세션 응답
///
/// 캐시 적중 경로에서는 `access_token`만 채워지고 나머지 토큰 필드는
/// 직렬화 결과에서 빠집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user_data: UserData,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token_expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token_expires_at: Option<DateTime<Utc>>,
}

impl SessionResponse {
    /// 새로 발급된 액세스/리프레시 토큰으로 응답 생성
    pub fn issued(user: User, access: IssuedToken, refresh: IssuedToken) -> Self {
        Self {
            user_data: UserData::from(user),
            access_token_expires_at: Some(access.expires_at()),
            access_token: access.token,
            refresh_token_expires_at: Some(refresh.expires_at()),
            refresh_token: Some(refresh.token),
        }
    }

    /// 캐시된 액세스 토큰을 재사용하는 응답 생성
    pub fn cached(user: User, access_token: String) -> Self {
        Self {
            user_data: UserData::from(user),
            access_token,
            access_token_expires_at: None,
            refresh_token: None,
            refresh_token_expires_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn stored_user() -> User {
        let mut user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$2b$04$secret-hash".to_string(),
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_user_data_never_carries_password() {
        let user = stored_user();
        let id = user.id_string();

        let json = serde_json::to_value(UserData::from(user)).unwrap();

        assert_eq!(json["id"].as_str(), id.as_deref());
        assert!(json.get("password").is_none());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn test_cached_session_omits_expiry_fields() {
        let response = SessionResponse::cached(stored_user(), "cached-token".to_string());

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["accessToken"], "cached-token");
        assert!(json.get("accessTokenExpiresAt").is_none());
        assert!(json.get("refreshToken").is_none());
        assert!(json.get("refreshTokenExpiresAt").is_none());
        assert!(json.get("userData").is_some());
    }
}
