//! # Google OAuth 2.0 클라이언트
//!
//! Authorization Code Flow 중 서버가 담당하는 세 번의 HTTP 호출을 구현합니다.
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | Authorization | `https://accounts.google.com/o/oauth2/v2/auth` | GET (브라우저) |
//! | Token Exchange | `https://oauth2.googleapis.com/token` | POST (form) |
//! | User Info | `https://www.googleapis.com/oauth2/v2/userinfo` | GET (Bearer) |
//!
//! 모든 실패는 `AppError::OAuthError`(400)로 변환됩니다.

use async_trait::async_trait;

use crate::config::{AuthProvider, GoogleOAuthConfig};
use crate::domain::models::oauth::OAuthUserInfo;
use crate::domain::models::oauth::google_user::{GoogleTokenResponse, GoogleUserInfo};
use crate::errors::errors::{AppError, AppResult};
use crate::services::auth::oauth_provider::OAuthProvider;

pub const GOOGLE_SCOPES: &str = "openid email profile";

#[derive(Clone)]
pub struct GoogleOAuthClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    auth_uri: String,
    token_uri: String,
    userinfo_uri: String,
}

impl GoogleOAuthClient {
    /// `GOOGLE_*` 환경 설정으로 생성합니다. 필수 값이 없으면 `InternalError`
    pub fn from_config() -> AppResult<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            client_id: GoogleOAuthConfig::client_id()?,
            client_secret: GoogleOAuthConfig::client_secret()?,
            redirect_uri: GoogleOAuthConfig::redirect_uri()?,
            auth_uri: GoogleOAuthConfig::auth_uri(),
            token_uri: GoogleOAuthConfig::token_uri(),
            userinfo_uri: GoogleOAuthConfig::userinfo_uri(),
        })
    }

    #[cfg(test)]
    fn for_test() -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id: "client-123.apps.googleusercontent.com".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "http://localhost:4321/auth/callback".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
            userinfo_uri: "https://www.googleapis.com/oauth2/v2/userinfo".to_string(),
        }
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuthClient {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    fn authorization_url(&self, state: &str) -> String {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", GOOGLE_SCOPES),
            ("state", state),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.auth_uri, query_string)
    }

    async fn exchange_code_for_token(&self, code: &str) -> AppResult<String> {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.redirect_uri.as_str()),
        ];

        let response = self
            .http
            .post(&self.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::OAuthError(format!("Google 토큰 요청 실패: {}", e)))?;

        let status = response.status();
        let body = response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::OAuthError(format!("Google 토큰 응답 파싱 실패: {}", e)))?;

        if !status.is_success() {
            let reason = body
                .error_description
                .or(body.error)
                .unwrap_or_else(|| status.to_string());
            log::warn!("Google 토큰 교환 실패: {}", reason);
            return Err(AppError::OAuthError(format!("Google 토큰 교환 실패: {}", reason)));
        }

        body.access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::OAuthError("Google 응답에 access_token이 없습니다".to_string()))
    }

    async fn fetch_user_info(&self, access_token: &str) -> AppResult<OAuthUserInfo> {
        let response = self
            .http
            .get(&self.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::OAuthError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Google 사용자 정보 조회 실패: {}", error_text);
            return Err(AppError::OAuthError("Google 사용자 정보 조회 실패".to_string()));
        }

        let info = response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::OAuthError(format!("Google 사용자 정보 파싱 실패: {}", e)))?;

        OAuthUserInfo::try_from(info)
    }
}
