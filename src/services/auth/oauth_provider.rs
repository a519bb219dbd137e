//! OAuth 프로바이더 추상화
//!
//! 로그인 흐름([`OAuthLoginService`](super::oauth_login_service::OAuthLoginService))은
//! 이 trait만 사용하므로, 테스트에서는 네트워크 없이 스텁 프로바이더를 주입할 수 있습니다.

use async_trait::async_trait;

use crate::config::AuthProvider;
use crate::domain::models::oauth::OAuthUserInfo;
use crate::errors::errors::AppResult;

#[async_trait]
pub trait OAuthProvider: Send + Sync {
    fn provider(&self) -> AuthProvider;

    /// 사용자를 보낼 인증 페이지 URL
    fn authorization_url(&self, state: &str) -> String;

    /// Authorization code를 프로바이더 액세스 토큰으로 교환합니다.
    async fn exchange_code_for_token(&self, code: &str) -> AppResult<String>;

    async fn fetch_user_info(&self, access_token: &str) -> AppResult<OAuthUserInfo>;
}
