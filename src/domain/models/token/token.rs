//! JWT 세션 토큰 클레임과 발급 결과
//!
//! 액세스 토큰과 리프레시 토큰은 같은 클레임 구조를 공유하고
//! 만료 시간만 다릅니다.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 모든 필드를 평평하게 나열합니다.
///
/// - `name`, `email`: 사용자 표시 정보
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `iss`: 발급자
/// - `jti`: 발급마다 새로 만드는 랜덤 토큰 ID (UUID v4)
/// - `iat`, `nbf`, `exp`: 발급/유효 시작/만료 시각 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub name: String,
    pub email: String,
    pub sub: String,
    pub iss: String,
    pub jti: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// 만료 시각을 `DateTime<Utc>`로 변환
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }
}

/// 서명된 토큰 문자열과 그 클레임
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: TokenClaims,
}

impl IssuedToken {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.claims.expires_at()
    }
}
