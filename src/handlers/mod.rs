//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층을 호출하고 응답으로 변환합니다.
//!
//! ```text
//! Client
//!   │ HTTP Request/Response
//!   ▼
//! Handlers (이 모듈)        ← Web Layer
//!   ▼
//! Services                  ← Service Layer
//!   ▼
//! Repositories              ← Repository Layer
//!   ▼
//! MongoDB + Redis
//! ```
//!
//! 서비스는 [`ServiceRegistry`](crate::core::ServiceRegistry)가 등록한 `web::Data`로 주입받고,
//! 모든 핸들러는 `AppResult<HttpResponse>`를 반환해 에러를 `AppError`의 JSON 응답으로 통일합니다.
//!
//! ```rust,ignore
//! #[get("/{id}")]
//! pub async fn get_content(
//!     content_service: web::Data<ContentService>,
//!     viewer: OptionalUser,
//!     id: web::Path<String>,
//! ) -> AppResult<HttpResponse> {
//!     let response = content_service.get(&id, viewer.0.as_ref()).await?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```
//!
//! ## 모듈 구성
//! - **`auth`**: 회원가입, 로그인, 토큰 갱신, 현재 사용자, Google OAuth
//! - **`contents`**: 콘텐츠 목록/상세/생성/수정/삭제

pub mod auth;
pub mod contents;
