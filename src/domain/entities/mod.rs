//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속성 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장소에 저장되는 엔티티)
//! ├── models/       ← 토큰 클레임, 인증된 사용자 등 값 객체
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! 모든 엔티티는 `serde`를 통해 BSON으로 직렬화되고, `_id` 필드는
//! `Option<ObjectId>`로 표현되어 저장 시 MongoDB가 할당합니다.

pub mod users;
