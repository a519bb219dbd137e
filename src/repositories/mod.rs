//! # Repository Layer
//!
//! 서비스는 `UserRepository` / `ContentRepository` trait 객체(`Arc<dyn ...>`)에만 의존하며,
//! 운영 환경에서는 MongoDB 구현을 주입합니다.

pub mod users;
pub mod contents;

#[cfg(test)]
pub mod memory;
