use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::UserRole;

/// 토큰 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    pub token_type: TokenType,
    pub iat: i64,
    pub exp: i64,
    /// 토큰 고유 ID
    pub jti: String,
}

/// 로그인/갱신 시 발급되는 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// 액세스 토큰 만료까지 남은 초
    pub expires_in: i64,
}
