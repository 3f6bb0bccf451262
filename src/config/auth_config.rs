//! 인증 관련 설정
//!
//! JWT 서명 키와 토큰 수명, 세션 캐시 TTL을 환경 변수에서 읽어옵니다.
//! 서명 키는 프로세스 시작 시 한 번 [`JwtSettings`]로 로드되어
//! 토큰 서비스 생성자에 주입됩니다.

use std::env;
use chrono::Duration;

/// JWT 환경 변수 로더
pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "secret".to_string()
            })
    }

    pub fn issuer() -> String {
        env::var("JWT_ISSUER").unwrap_or_else(|_| "user_login".to_string())
    }

    pub fn access_token_minutes() -> i64 {
        env::var("JWT_ACCESS_TOKEN_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30)
    }

    pub fn refresh_token_hours() -> i64 {
        env::var("JWT_REFRESH_TOKEN_HOURS")
            .unwrap_or_else(|_| "72".to_string())
            .parse()
            .unwrap_or(72)
    }

    /// 현재 환경 변수로부터 [`JwtSettings`]를 구성합니다.
    pub fn settings() -> JwtSettings {
        JwtSettings {
            secret: Self::secret(),
            issuer: Self::issuer(),
            access_token_ttl: Self::access_token_ttl(Self::access_token_minutes()),
            refresh_token_ttl: Self::refresh_token_ttl(Self::refresh_token_hours()),
        }
    }

    /// 표현할 수 없는 값이면 기본값 30분
    pub fn access_token_ttl(minutes: i64) -> Duration {
        Duration::try_minutes(minutes).unwrap_or_else(|| {
            log::warn!("JWT_ACCESS_TOKEN_MINUTES={} 범위 초과. 기본값 30분 사용", minutes);
            Duration::minutes(30)
        })
    }

    /// 표현할 수 없는 값이면 기본값 72시간
    pub fn refresh_token_ttl(hours: i64) -> Duration {
        Duration::try_hours(hours).unwrap_or_else(|| {
            log::warn!("JWT_REFRESH_TOKEN_HOURS={} 범위 초과. 기본값 72시간 사용", hours);
            Duration::hours(72)
        })
    }
}

/// 토큰 발급/검증에 필요한 설정값
///
/// 발급과 검증은 같은 `secret`을 공유합니다.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub issuer: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

impl JwtSettings {
    /// 기본 수명(액세스 30분, 리프레시 72시간)을 사용하는 설정
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: "user_login".to_string(),
            access_token_ttl: Duration::minutes(30),
            refresh_token_ttl: Duration::hours(72),
        }
    }
}

/// 세션 캐시 설정
pub struct SessionConfig;

impl SessionConfig {
    /// `login:{email}` 캐시 항목의 TTL (초)
    pub fn cache_ttl_seconds() -> u64 {
        env::var("SESSION_CACHE_TTL_SECONDS")
            .unwrap_or_else(|_| "600".to_string())
            .parse()
            .unwrap_or(600)
    }
}
