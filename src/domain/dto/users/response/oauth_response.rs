use serde::{Deserialize, Serialize};

use crate::domain::dto::users::response::user_response::UserBasicInfo;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::TokenPair;

/// `GET /auth/oauth/google` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthAuthorizationUrlResponse {
    pub authorization_url: String,
    pub state: String,
}

/// OAuth 콜백 처리 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthLoginResponse {
    pub user: UserBasicInfo,
    pub tokens: TokenPair,
    /// 이번 로그인으로 계정이 새로 생성되었는지 여부
    pub is_new_user: bool,
}

impl OAuthLoginResponse {
    pub fn new(user: &User, tokens: TokenPair, is_new_user: bool) -> Self {
        Self {
            user: UserBasicInfo::from(user),
            tokens,
            is_new_user,
        }
    }
}
