//! # Service Layer
//!
//! 비즈니스 로직을 담당합니다. 각 서비스는 생성 시 리포지토리 trait 객체를 주입받습니다.

pub mod users;
pub mod auth;
pub mod contents;
