//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패를
//! 동일한 JSON 형태(`{"error": ..., "code": ...}`)의 HTTP 응답으로 변환합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn find_content(id: &str) -> Result<Content, AppError> {
//!     repo.find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("콘텐츠를 찾을 수 없습니다".to_string()))
//! }
//! ```

use actix_web::http::{StatusCode, header};
use thiserror::Error;

pub const SERVER_ERROR_MESSAGE: &str = "서버 내부 오류가 발생했습니다";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 (403)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// OAuth 핸드셰이크 실패 (400)
    #[error("OAuth error: {0}")]
    OAuthError(String),

    /// 외부 서비스 에러 (500)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트가 분기 처리에 사용하는 고정 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::RedisError(_) => "CACHE_ERROR",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ConflictError(_) => "CONFLICT",
            AppError::AuthenticationError(_) => "AUTHENTICATION_FAILED",
            AppError::AuthorizationError(_) => "FORBIDDEN",
            AppError::OAuthError(_) => "OAUTH_ERROR",
            AppError::ExternalServiceError(_) => "EXTERNAL_SERVICE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::OAuthError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러 타입을 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        // 5xx 상세 내용은 로그에만 남깁니다.
        let message = if status.is_server_error() {
            log::error!("❌ {}", self);
            SERVER_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        let mut builder = actix_web::HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }

        builder.json(serde_json::json!({
            "error": message,
            "code": self.code()
        }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(error: redis::RedisError) -> Self {
        AppError::RedisError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
