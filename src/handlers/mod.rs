//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 가입/로그인 흐름, 토큰, 해싱          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories / Caching - MongoDB, Redis       ← Infrastructure
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 응답 형식
//!
//! 성공 응답은 [`ApiResponse`](crate::domain::dto::ApiResponse) 봉투를,
//! 실패 응답은 `AppError`가 렌더링하는 `{ statusCode, message }`를 사용합니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: `POST /user/register`, `POST /user/login`, `GET /user/me`
//! - **`auth`**: `POST /auth/verify`

pub mod users;
pub mod auth;

use actix_web::{error, web};
use crate::errors::AppError;

/// JSON 본문 파싱 실패를 400 응답으로 바꾸는 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::ValidationError(format!("failed to bind JSON: {}", err)))
    })
}

/// validator 에러를 `ValidationError`로 변환
pub(crate) fn validation_error(errors: validator::ValidationErrors) -> AppError {
    AppError::ValidationError(errors.to_string())
}
