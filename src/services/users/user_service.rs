//! 사용자 계정 서비스
//!
//! 회원가입, 비밀번호 인증, 활성 사용자 조회를 담당합니다.
//! 인증 실패 메시지는 이메일 존재 여부를 드러내지 않도록 동일하게 유지합니다.

use std::sync::Arc;

use bcrypt::{hash, verify};
use validator::Validate;

use crate::domain::dto::users::request::RegisterRequest;
use crate::domain::dto::users::response::{RegisterResponse, UserResponse};
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::users::UserRepository;
use crate::utils::string_utils::normalize_email;

pub const INVALID_CREDENTIALS: &str = "이메일 또는 비밀번호가 올바르지 않습니다";
pub const ACCOUNT_DISABLED: &str = "계정이 비활성화되었습니다";

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            bcrypt_cost,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        request.validate()?;

        let email = normalize_email(&request.email);

        if self.user_repo.exists_by_email(&email).await? {
            log::info!("중복 이메일 가입 시도: {}", email);
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new_local(
            email,
            password_hash,
            request.nickname.trim().to_string(),
            request.country.trim().to_uppercase(),
            request.preferred_language,
        );

        let created = self.user_repo.create(user).await?;

        log::info!("✅ 회원가입 완료: {} ({})", created.email, created.id);

        Ok(RegisterResponse::from(&created))
    }

    /// 이메일/비밀번호로 사용자를 인증합니다.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let invalid = || AppError::AuthenticationError(INVALID_CREDENTIALS.to_string());

        let user = self
            .user_repo
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_else(|| {
                log::warn!("로그인 실패 (존재하지 않는 이메일): {}", email);
                invalid()
            })?;

        let password_hash = match user.password_hash.as_deref() {
            Some(hash) if user.can_authenticate_with_password() => hash,
            _ => {
                log::warn!("로그인 실패 (비밀번호 없는 OAuth 계정): {}", user.id);
                return Err(invalid());
            }
        };

        let is_valid = verify(password, password_hash).context("비밀번호 검증 실패")?;

        if !is_valid {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", user.id);
            return Err(invalid());
        }

        if !user.can_login() {
            log::warn!("비활성 계정 로그인 시도: {}", user.id);
            return Err(AppError::AuthenticationError(ACCOUNT_DISABLED.to_string()));
        }

        Ok(user)
    }

    /// 토큰의 주체가 존재하고 로그인 가능한지 확인합니다.
    pub async fn get_active_user(&self, user_id: &str) -> AppResult<User> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()))?;

        if !user.can_login() {
            return Err(AppError::AuthenticationError(ACCOUNT_DISABLED.to_string()));
        }

        Ok(user)
    }

    pub async fn get_profile(&self, user_id: &str) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }
}
