//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 구조체입니다.
//! 요청 DTO는 `validator::Validate`로 입력을 검증하고,
//! 응답 DTO는 엔티티에서 노출 가능한 필드만 골라 직렬화합니다.
//!
//! ```rust,ignore
//! use validator::Validate;
//!
//! payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//! ```

pub mod users;
pub mod contents;
