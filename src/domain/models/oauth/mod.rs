//! OAuth 프로필 모델
//!
//! 프로바이더별 응답([`google_user::GoogleUserInfo`])을 공통 프로필
//! [`OAuthUserInfo`]로 정규화하여 로그인 흐름에서 사용합니다.

pub mod google_user;

use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;

/// 프로바이더와 무관한 OAuth 사용자 프로필
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthUserInfo {
    pub provider: AuthProvider,
    /// 프로바이더 내 고유 사용자 ID
    pub provider_id: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}
