//! # Domain Layer
//!
//! - [`entities`] - 영속 엔티티 (User, Content)
//! - [`dto`] - API 요청/응답 구조체
//! - [`models`] - 인증 주체, JWT 클레임, OAuth 프로필

pub mod entities;
pub mod dto;
pub mod models;
