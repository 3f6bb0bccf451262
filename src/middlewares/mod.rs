//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더에서 토큰 추출 및 검증
//! - 검증된 사용자 정보를 request extension에 저장
//! - 실패 시 `{ "statusCode": 401, "message": ... }` 응답
//!
//! `TokenService`는 `web::Data<TokenService>`로 앱에 등록되어 있어야 합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! web::scope("/user")
//!     .service(
//!         web::resource("/me")
//!             .wrap(AuthMiddleware)
//!             .route(web::get().to(handlers::users::me)),
//!     );
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
