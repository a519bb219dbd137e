//! # Domain Entities
//!
//! 저장소에 영속되는 핵심 도메인 엔티티입니다.
//! 엔티티는 저장소 표현(BSON 등)에 의존하지 않으며, 변환은 리포지토리 계층이 담당합니다.
//!
//! - [`users`] - 사용자 계정 (로컬 / OAuth)
//! - [`contents`] - 카탈로그 콘텐츠 (드라마 / 영화 / 뮤직비디오 / 예능)

pub mod users;
pub mod contents;
