//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별로 묶어 등록하고, JSON/쿼리 파싱 에러를 `AppError` 형식으로 통일합니다.
//!
//! # Auth Middleware Usage
//!
//! - `/api/v1/auth` - 공개. `GET /me`만 핸들러 단위로 `AuthMiddleware::required()` 적용
//! - `/api/v1/contents` - `AuthMiddleware::optional()`. 쓰기 핸들러는 `AdminUser` 추출기로 관리자 검사
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .configure(|cfg| registry.configure(cfg))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, error, get, web};
use serde_json::json;

use crate::errors::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());

    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_content_routes(cfg);
}

/// 인증 관련 라우트
///
/// ```bash
/// # 회원가입
/// curl -X POST http://localhost:8080/api/v1/auth/register \
///   -H "Content-Type: application/json" \
///   -d '{"email":"fan@example.com","password":"Password1","nickname":"fan","country":"KR"}'
///
/// # Google OAuth 시작
/// curl http://localhost:8080/api/v1/auth/oauth/google
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::refresh)
            .service(handlers::auth::me)
            // Google OAuth
            .service(handlers::auth::google_authorization_url)
            .service(handlers::auth::google_callback)
            .service(handlers::auth::google_callback_redirect),
    );
}

/// 콘텐츠 카탈로그 라우트
///
/// ```bash
/// curl "http://localhost:8080/api/v1/contents?content_type=drama&search=goblin&lang=es"
///
/// curl -X PATCH http://localhost:8080/api/v1/contents/{id} \
///   -H "Authorization: Bearer <admin access token>" \
///   -H "Content-Type: application/json" \
///   -d '{"rating": 4.8}'
/// ```
fn configure_content_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/contents")
            .wrap(AuthMiddleware::optional())
            .service(handlers::contents::list_contents)
            .service(handlers::contents::create_content)
            .service(handlers::contents::get_content)
            .service(handlers::contents::update_content)
            .service(handlers::contents::delete_content),
    );
}

/// JSON 본문 파싱 실패를 400 `VALIDATION_ERROR`로 변환
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 파싱 실패: {}", err);
        let message = match &err {
            error::JsonPayloadError::ContentType => "Content-Type은 application/json이어야 합니다".to_string(),
            other => format!("잘못된 요청 본문입니다: {}", other),
        };
        AppError::ValidationError(message).into()
    })
}

/// 쿼리 문자열 파싱 실패를 400 `VALIDATION_ERROR`로 변환
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 쿼리 파라미터입니다: {}", err)).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "catalog_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": { "database": "MongoDB", "cache": "Redis", "oauth": "Google" }
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "oauth": "Google"
        }
    }))
}
