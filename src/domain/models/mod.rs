//! # Domain Models
//!
//! 저장소에 영속되지 않는 인증/토큰/OAuth 관련 모델입니다.

pub mod auth;
pub mod token;
pub mod oauth;
