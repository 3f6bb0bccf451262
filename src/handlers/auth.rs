//! Authentication HTTP Handlers
//!
//! - **토큰 검증**: `POST /auth/verify` - `Authorization: Bearer` 토큰의 클레임 반환
use actix_web::{http::StatusCode, post, web, HttpRequest, HttpResponse};

use crate::domain::dto::ApiResponse;
use crate::errors::AppError;
use crate::services::auth::TokenService;

/// 토큰 검증 엔드포인트
///
/// 서명, 발급자, 유효 기간을 확인하고 클레임을 그대로 돌려줍니다.
/// 어떤 이유로든 검증에 실패하면 401입니다.
///
/// # Endpoint
/// `POST /auth/verify`
#[post("/verify")]
pub async fn verify_token(
    req: HttpRequest,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_token(token)?;

    Ok(ApiResponse::new(StatusCode::OK, "token is valid", claims).into_response())
}
