use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;
use crate::domain::entities::users::user::{Language, User, UserRole};
use crate::domain::models::token::TokenPair;

/// `GET /auth/me` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub nickname: String,
    pub country: String,
    pub preferred_language: Language,
    pub role: UserRole,
    pub is_active: bool,
    pub is_verified: bool,
    pub oauth_provider: Option<AuthProvider>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            nickname,
            country,
            preferred_language,
            role,
            is_active,
            is_verified,
            oauth_provider,
            avatar_url,
            created_at,
            ..
        } = user;

        Self {
            id,
            email,
            nickname,
            country,
            preferred_language,
            role,
            is_active,
            is_verified,
            oauth_provider,
            avatar_url,
            created_at,
        }
    }
}

/// 로그인 응답에 포함되는 사용자 요약
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBasicInfo {
    pub id: String,
    pub email: String,
    pub nickname: String,
    pub preferred_language: Language,
}

impl From<&User> for UserBasicInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            nickname: user.nickname.clone(),
            preferred_language: user.preferred_language,
        }
    }
}

/// 회원가입 응답 (201)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: String,
    pub email: String,
    pub nickname: String,
}

impl From<&User> for RegisterResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            nickname: user.nickname.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserBasicInfo,
    pub tokens: TokenPair,
}

impl LoginResponse {
    pub fn new(user: &User, tokens: TokenPair) -> Self {
        Self {
            user: UserBasicInfo::from(user),
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let user = User::new_local(
            "fan@example.com".to_string(),
            "$2b$04$secret".to_string(),
            "fan".to_string(),
            "AR".to_string(),
            Language::Es,
        );

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "user");
        assert_eq!(json["preferred_language"], "es");
    }
}
