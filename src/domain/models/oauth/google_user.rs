//! Google userinfo / token 엔드포인트 응답 모델

use serde::Deserialize;

use crate::config::AuthProvider;
use crate::domain::models::oauth::OAuthUserInfo;
use crate::errors::errors::AppError;

/// `https://oauth2.googleapis.com/token` 응답
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<i64>,
    pub token_type: Option<String>,
    pub id_token: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// `https://www.googleapis.com/oauth2/v2/userinfo` 응답
///
/// `name`, `picture`는 계정 설정에 따라 누락될 수 있습니다.
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub verified_email: Option<bool>,
}

impl TryFrom<GoogleUserInfo> for OAuthUserInfo {
    type Error = AppError;

    fn try_from(info: GoogleUserInfo) -> Result<Self, Self::Error> {
        let provider_id = info
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::OAuthError("Google 프로필에 사용자 ID가 없습니다".to_string()))?;

        let email = info
            .email
            .filter(|email| !email.is_empty())
            .ok_or_else(|| AppError::OAuthError("Google 프로필에 이메일이 없습니다".to_string()))?;

        Ok(OAuthUserInfo {
            provider: AuthProvider::Google,
            provider_id,
            email,
            name: info.name.filter(|name| !name.trim().is_empty()),
            avatar_url: info.picture.filter(|url| !url.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_profile_conversion() {
        let raw: GoogleUserInfo = serde_json::from_value(serde_json::json!({
            "id": "1098",
            "email": "fan@gmail.com",
            "name": "Fan",
            "picture": "https://lh3.googleusercontent.com/p.png"
        }))
        .unwrap();

        let info = OAuthUserInfo::try_from(raw).unwrap();

        assert_eq!(info.provider, AuthProvider::Google);
        assert_eq!(info.provider_id, "1098");
        assert_eq!(info.name.as_deref(), Some("Fan"));
    }

    #[test]
    fn test_google_profile_without_email_is_rejected() {
        let raw: GoogleUserInfo =
            serde_json::from_value(serde_json::json!({ "id": "1098" })).unwrap();

        assert!(matches!(
            OAuthUserInfo::try_from(raw),
            Err(AppError::OAuthError(_))
        ));
    }

    #[test]
    fn test_google_profile_optional_fields() {
        let raw: GoogleUserInfo = serde_json::from_value(serde_json::json!({
            "id": "1098",
            "email": "fan@gmail.com",
            "name": ""
        }))
        .unwrap();

        let info = OAuthUserInfo::try_from(raw).unwrap();

        assert!(info.name.is_none());
        assert!(info.avatar_url.is_none());
    }
}
