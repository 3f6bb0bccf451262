//! 요청/응답 데이터 전송 객체 (DTO)

pub mod api_response;
pub mod users;

pub use api_response::ApiResponse;
pub use users::*;
