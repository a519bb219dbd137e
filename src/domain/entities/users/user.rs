//! User Entity Implementation
//!
//! 로컬 인증(이메일/패스워드)과 OAuth 인증을 모두 지원하는 사용자 엔티티입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;
use crate::domain::models::oauth::OAuthUserInfo;

/// OAuth 신규 가입 시 닉네임 최대 길이
pub const MAX_NICKNAME_CHARS: usize = 20;

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "user" => Some(UserRole::User),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// 선호 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ko,
    #[default]
    Es,
    Pt,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::Es => "es",
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ko" => Some(Language::Ko),
            "es" => Some(Language::Es),
            "pt" => Some(Language::Pt),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// UUID v4 문자열
    pub id: String,
    /// 소문자로 정규화된 이메일 (unique)
    pub email: String,
    /// OAuth 전용 계정은 None
    pub password_hash: Option<String>,
    pub nickname: String,
    /// ISO 3166-1 alpha-2 국가 코드 (미입력 시 빈 문자열)
    pub country: String,
    pub preferred_language: Language,
    pub role: UserRole,
    pub is_active: bool,
    pub is_verified: bool,
    pub oauth_provider: Option<AuthProvider>,
    pub oauth_id: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 로컬 사용자 생성
    ///
    /// 이메일 인증 전 상태로 시작합니다.
    pub fn new_local(
        email: String,
        password_hash: String,
        nickname: String,
        country: String,
        preferred_language: Language,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.trim().to_lowercase(),
            password_hash: Some(password_hash),
            nickname,
            country,
            preferred_language,
            role: UserRole::User,
            is_active: true,
            is_verified: false,
            oauth_provider: None,
            oauth_id: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// OAuth 프로필로 새 사용자 생성
    ///
    /// 닉네임은 프로필 이름(없으면 이메일 로컬 파트)을 20자로 자른 값입니다.
    /// 프로바이더가 이메일을 확인했으므로 인증 완료 상태로 시작합니다.
    pub fn new_oauth(info: &OAuthUserInfo) -> Self {
        let now = Utc::now();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: info.email.trim().to_lowercase(),
            password_hash: None,
            nickname: Self::nickname_from_profile(info),
            country: String::new(),
            preferred_language: Language::Es,
            role: UserRole::User,
            is_active: true,
            is_verified: true,
            oauth_provider: Some(info.provider),
            oauth_id: Some(info.provider_id.clone()),
            avatar_url: info.avatar_url.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn nickname_from_profile(info: &OAuthUserInfo) -> String {
        let source = info
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| info.email.split('@').next().unwrap_or_default());

        source.chars().take(MAX_NICKNAME_CHARS).collect()
    }

    /// 기존 계정에 OAuth 식별자를 연결합니다. 아바타는 비어있을 때만 채웁니다.
    pub fn link_oauth(&mut self, info: &OAuthUserInfo) {
        self.oauth_provider = Some(info.provider);
        self.oauth_id = Some(info.provider_id.clone());

        if self.avatar_url.as_deref().is_none_or(str::is_empty) {
            self.avatar_url = info.avatar_url.clone();
        }

        self.updated_at = Utc::now();
    }

    pub fn can_login(&self) -> bool {
        self.is_active
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.password_hash.as_deref().is_some_and(|hash| !hash.is_empty())
    }

    pub fn is_oauth_user(&self) -> bool {
        self.oauth_provider.is_some_and(|provider| provider != AuthProvider::Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn google_profile(name: Option<&str>, email: &str) -> OAuthUserInfo {
        OAuthUserInfo {
            provider: AuthProvider::Google,
            provider_id: "google-123".to_string(),
            email: email.to_string(),
            name: name.map(str::to_string),
            avatar_url: Some("https://lh3.googleusercontent.com/a.png".to_string()),
        }
    }

    #[test]
    fn test_new_local_user_defaults() {
        let user = User::new_local(
            " Fan@Example.COM ".to_string(),
            "hash".to_string(),
            "fan".to_string(),
            "MX".to_string(),
            Language::Es,
        );

        assert_eq!(user.email, "fan@example.com");
        assert_eq!(user.role, UserRole::User);
        assert!(user.is_active);
        assert!(!user.is_verified);
        assert!(user.can_login());
        assert!(user.can_authenticate_with_password());
        assert!(!user.is_oauth_user());
        assert!(uuid::Uuid::parse_str(&user.id).is_ok());
    }

    #[test]
    fn test_new_oauth_user_truncates_nickname() {
        let info = google_profile(Some("A very long display name from Google"), "x@gmail.com");
        let user = User::new_oauth(&info);

        assert_eq!(user.nickname.chars().count(), MAX_NICKNAME_CHARS);
        assert_eq!(user.nickname, "A very long display ");
        assert!(user.is_verified);
        assert_eq!(user.country, "");
        assert_eq!(user.preferred_language, Language::Es);
        assert_eq!(user.oauth_id.as_deref(), Some("google-123"));
        assert!(!user.can_authenticate_with_password());
    }

    #[test]
    fn test_new_oauth_user_falls_back_to_email_local_part() {
        let user = User::new_oauth(&google_profile(None, "kdrama_lover@gmail.com"));
        assert_eq!(user.nickname, "kdrama_lover");

        let blank = User::new_oauth(&google_profile(Some("   "), "mv@gmail.com"));
        assert_eq!(blank.nickname, "mv");
    }

    #[test]
    fn test_link_oauth_keeps_existing_avatar() {
        let mut user = User::new_local(
            "fan@example.com".to_string(),
            "hash".to_string(),
            "fan".to_string(),
            "BR".to_string(),
            Language::Pt,
        );
        user.avatar_url = Some("https://cdn.example/me.png".to_string());

        user.link_oauth(&google_profile(Some("Fan"), "fan@example.com"));

        assert_eq!(user.oauth_provider, Some(AuthProvider::Google));
        assert_eq!(user.avatar_url.as_deref(), Some("https://cdn.example/me.png"));
    }

    #[test]
    fn test_link_oauth_fills_missing_avatar() {
        let mut user = User::new_local(
            "fan@example.com".to_string(),
            "hash".to_string(),
            "fan".to_string(),
            "BR".to_string(),
            Language::Pt,
        );

        user.link_oauth(&google_profile(Some("Fan"), "fan@example.com"));

        assert!(user.avatar_url.is_some());
        assert!(user.is_oauth_user());
    }

    #[test]
    fn test_inactive_user_cannot_login() {
        let mut user = User::new_oauth(&google_profile(Some("Fan"), "fan@example.com"));
        user.is_active = false;

        assert!(!user.can_login());
    }

    #[test]
    fn test_role_and_language_parsing() {
        assert_eq!(UserRole::from_str("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_str("root"), None);
        assert_eq!(Language::from_str("pt"), Some(Language::Pt));
        assert_eq!(Language::default(), Language::Es);
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }
}
