//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 인증 미들웨어 (AuthMiddleware)
//! - Bearer 액세스 토큰 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드, 역할 검사 지원
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .app_data(web::Data::new(TokenService::from_config()))
//!     .service(
//!         web::scope("/api/v1/auth/me")
//!             .wrap(AuthMiddleware::required())
//!             .route("", web::get().to(me)),
//!     )
//!     .service(
//!         web::scope("/api/v1/contents")
//!             .wrap(AuthMiddleware::optional())
//!             .route("", web::get().to(list_contents)),
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::{AuthMiddleware, AuthMode, RequiredRole};
