use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 리프레시 요청 본문. 쿠키로 토큰을 보낸 경우 본문은 비어 있을 수 있습니다.
#[derive(Debug, Default, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: Option<String>,
}

/// `POST /auth/oauth/google/callback` 본문
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackRequest {
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,

    #[validate(length(min = 1, message = "State가 필요합니다"))]
    pub state: String,
}

/// `GET /auth/oauth/google/callback` 쿼리 (프로바이더 리다이렉트)
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl OAuthCallbackQuery {
    /// 프로바이더 에러를 확인하고 `code`/`state`를 검증된 본문 형태로 변환합니다.
    pub fn into_request(self) -> Result<OAuthCallbackRequest, String> {
        if let Some(error) = self.error {
            return Err(match self.error_description {
                Some(description) => format!("{}: {}", error, description),
                None => error,
            });
        }

        Ok(OAuthCallbackRequest {
            code: self.code.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
        })
    }
}
