//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//!
//! - [`data_config`] - 실행 환경, 저장소, 서버, 요청 제한, CORS 설정
//! - [`auth_config`] - JWT, Google OAuth, OAuth state 설정
//!
//! 민감한 값은 환경 변수로만 받으며, 개발용 기본값을 쓰는 경우 경고 로그를 남깁니다.
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig};
//!
//! let env = Environment::current();
//! let bind = (ServerConfig::host(), ServerConfig::port());
//! let ttl = JwtConfig::access_expiration_minutes();
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
