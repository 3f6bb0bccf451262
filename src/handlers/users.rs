//! # User Account HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/user/register` | 가입 또는 캐시된 세션 재사용 | 202 Accepted |
//! | `POST` | `/user/login` | 이메일/비밀번호 로그인 | 200 OK |
//! | `GET` | `/user/me` | 토큰 주체의 사용자 정보 (Bearer 필요) | 200 OK |
//!
//! ```bash
//! curl -X POST http://localhost:8080/user/register \
//!   -H "Content-Type: application/json" \
//!   -d '{"name":"alice","email":"alice@example.com","password":"secret"}'
//! ```

use actix_web::{get, http::StatusCode, post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::users::request::{LoginRequest, RegisterUserRequest};
use crate::domain::dto::users::response::UserData;
use crate::domain::dto::ApiResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::handlers::validation_error;
use crate::middlewares::AuthMiddleware;
use crate::services::users::UserService;

/// 가입(또는 로그인) 핸들러
///
/// 같은 이메일로 10분 안에 다시 호출하면 캐시된 액세스 토큰을 돌려줍니다.
#[post("/register")]
pub async fn register(
    user_service: web::Data<UserService>,
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(validation_error)?;

    let session = user_service
        .register_or_login(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok(ApiResponse::new(StatusCode::ACCEPTED, "user registered successfully", session).into_response())
}

/// 로그인 핸들러
#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(validation_error)?;

    let session = user_service.login(&payload.email, &payload.password).await?;

    Ok(ApiResponse::new(StatusCode::OK, "login successful", session).into_response())
}

/// 현재 인증된 사용자 정보 조회
///
/// 저장소에서 최신 정보를 다시 읽습니다. 토큰이 가리키는 사용자가 사라졌으면 404입니다.
#[get("/me", wrap = "AuthMiddleware")]
pub async fn me(
    user_service: web::Data<UserService>,
    current_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_user_by_id(&current_user.user_id).await?;

    Ok(ApiResponse::new(StatusCode::OK, "user retrieved successfully", UserData::from(user)).into_response())
}
