//! Users Entity Module
//!
//! 로컬 인증과 OAuth 인증을 모두 지원하는 User 엔티티를 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{Language, User};
//!
//! let user = User::new_local(
//!     "user@example.com".to_string(),
//!     hashed_password,
//!     "nickname".to_string(),
//!     "MX".to_string(),
//!     Language::Es,
//! );
//! ```

pub mod user;

pub use user::{Language, User, UserRole};
