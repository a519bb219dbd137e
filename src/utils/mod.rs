//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 문자열 정리, 이메일 정규화, 검색어 이스케이프
//! - [`display_terminal`] - 서버 시작 시 터미널 출력
//!
//! ```rust,ignore
//! use crate::utils::string_utils::normalize_email;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let email = normalize_email("  Fan@Example.COM ");
//! print_boxed_title("Catalog Service Backend");
//! ```

pub mod string_utils;
pub mod display_terminal;
