//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, JWT 토큰, OAuth state 관련 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ACCESS_EXPIRATION_MINUTES="30"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//!
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:4321/auth/callback"
//!
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! export OAUTH_STATE_TTL_MINUTES="10"
//! ```

use std::env;

use crate::errors::errors::{AppError, AppResult};

fn required_var(name: &str) -> AppResult<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::InternalError(format!("{} must be set", name)))
}

/// Google OAuth 2.0 클라이언트 설정
///
/// 자격 증명이 없어도 서버는 기동되며, OAuth 엔드포인트 호출 시점에 에러를 반환합니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub fn client_id() -> AppResult<String> {
        required_var("GOOGLE_CLIENT_ID")
    }

    pub fn client_secret() -> AppResult<String> {
        required_var("GOOGLE_CLIENT_SECRET")
    }

    pub fn redirect_uri() -> AppResult<String> {
        required_var("GOOGLE_REDIRECT_URI")
    }

    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/v2/auth".to_string())
    }

    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string())
    }
}

/// JWT 서명 및 만료 설정
pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// 액세스 토큰 만료 시간(분). 기본값: 30
    pub fn access_expiration_minutes() -> i64 {
        env::var("JWT_ACCESS_EXPIRATION_MINUTES")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|minutes| *minutes > 0)
            .unwrap_or(30)
    }

    /// 리프레시 토큰 만료 기간(일). 기본값: 7
    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|days| *days > 0)
            .unwrap_or(7)
    }
}

/// OAuth state(CSRF 방지) 설정
pub struct OAuthConfig;

impl OAuthConfig {
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET").unwrap_or_else(|_| {
            log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
            "oauth-state-secret".to_string()
        })
    }

    pub fn state_ttl_minutes() -> i64 {
        env::var("OAUTH_STATE_TTL_MINUTES")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|minutes| *minutes > 0)
            .unwrap_or(10)
    }
}

/// 계정 인증 수단
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Local,
    Google,
}

impl AuthProvider {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(AuthProvider::from_str("local").unwrap(), AuthProvider::Local);
        assert_eq!(AuthProvider::from_str("google").unwrap(), AuthProvider::Google);

        // 대소문자 무관
        assert_eq!(AuthProvider::from_str("GOOGLE").unwrap(), AuthProvider::Google);

        assert!(AuthProvider::from_str("twitter").is_err());
    }

    #[test]
    fn test_auth_provider_as_string() {
        assert_eq!(AuthProvider::Local.as_str(), "local");
        assert_eq!(AuthProvider::Google.as_str(), "google");
    }

    #[test]
    fn test_auth_provider_serializes_lowercase() {
        let json = serde_json::to_string(&AuthProvider::Google).unwrap();
        assert_eq!(json, "\"google\"");

        let parsed: AuthProvider = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(parsed, AuthProvider::Local);
    }

    #[test]
    fn test_missing_required_var_is_internal_error() {
        let result = required_var("CATALOG_TEST_SURELY_UNSET_VARIABLE");
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }
}
