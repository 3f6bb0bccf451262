//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 발급과 검증을 담당합니다.
//! 두 토큰은 같은 클레임 구조와 서명 키를 쓰고 수명만 다릅니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtSettings;
use crate::domain::models::token::{IssuedToken, TokenClaims};
use crate::errors::AppError;

const BEARER_PREFIX: &str = "Bearer ";

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용합니다. 서명 키와 수명은 생성 시 주입된
/// [`JwtSettings`]에서 가져옵니다.
pub struct TokenService {
    settings: JwtSettings,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(settings: JwtSettings) -> Self {
        let encoding_key = EncodingKey::from_secret(settings.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(settings.secret.as_bytes());

        Self {
            settings,
            encoding_key,
            decoding_key,
        }
    }

    /// 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::UnprocessableError` - 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let access = token_service.issue_access_token(&user.name, &user.email, &user_id)?;
    /// println!("expires at {}", access.expires_at());
    /// ```
    pub fn issue_access_token(&self, name: &str, email: &str, user_id: &str) -> Result<IssuedToken, AppError> {
        self.issue(name, email, user_id, self.settings.access_token_ttl)
            .map_err(|e| AppError::UnprocessableError(format!("failed to generate access token: {}", e)))
    }

    /// 리프레시 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::UnprocessableError` - 서명 실패
    pub fn issue_refresh_token(&self, name: &str, email: &str, user_id: &str) -> Result<IssuedToken, AppError> {
        self.issue(name, email, user_id, self.settings.refresh_token_ttl)
            .map_err(|e| AppError::UnprocessableError(format!("failed to generate refresh token: {}", e)))
    }

    fn issue(
        &self,
        name: &str,
        email: &str,
        user_id: &str,
        ttl: Duration,
    ) -> Result<IssuedToken, String> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| format!("token lifetime {} overflows", ttl))?;

        let claims = TokenClaims {
            name: name.to_string(),
            email: email.to_string(),
            sub: user_id.to_string(),
            iss: self.settings.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| e.to_string())?;

        Ok(IssuedToken { token, claims })
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명, 발급자, `nbf`, 만료를 모두 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 형식/서명 오류, 만료, 아직 유효하지 않은 토큰
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_nbf = true;
        validation.set_issuer(&[self.settings.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "sub", "iss"]);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::ImmatureSignature => {
                    AppError::AuthenticationError("아직 유효하지 않은 토큰입니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.extract_bearer_token("Bearer eyJhbGciOi...")?;
    /// let claims = token_service.verify_token(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix(BEARER_PREFIX) {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}
