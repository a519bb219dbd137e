use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::users::user::Language;
use crate::utils::string_utils::validate_not_blank;

/// 이메일/패스워드 회원가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    #[validate(length(min = 1, max = 20, message = "닉네임은 1-20자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub nickname: String,

    /// ISO 3166-1 alpha-2 국가 코드
    #[serde(default)]
    #[validate(length(max = 2, message = "국가 코드는 2자리여야 합니다"))]
    pub country: String,

    #[serde(default)]
    pub preferred_language: Language,
}

pub(crate) fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}
