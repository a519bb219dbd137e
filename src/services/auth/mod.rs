//! 인증 서비스 모듈
//!
//! - [`token_service`] - JWT 액세스/리프레시 토큰
//! - [`oauth_state`] - OAuth state 서명/검증
//! - [`oauth_provider`] - OAuth 프로바이더 trait
//! - [`google_auth_service`] - Google 구현
//! - [`oauth_login_service`] - OAuth 로그인 및 계정 연결

pub mod token_service;
pub mod oauth_state;
pub mod oauth_provider;
pub mod google_auth_service;
pub mod oauth_login_service;

pub use google_auth_service::GoogleOAuthClient;
pub use oauth_login_service::OAuthLoginService;
pub use oauth_provider::OAuthProvider;
pub use oauth_state::OAuthStateService;
pub use token_service::TokenService;
