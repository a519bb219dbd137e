//! OAuth 로그인 흐름
//!
//! 1. state 검증
//! 2. authorization code → 프로바이더 액세스 토큰
//! 3. 프로필 조회
//! 4. 계정 결정: (프로바이더, ID) 일치 → 이메일 일치 시 연결 → 신규 생성
//! 5. 로그인 가능 여부 확인

use std::sync::Arc;

use crate::domain::dto::users::response::OAuthAuthorizationUrlResponse;
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;
use crate::services::auth::oauth_provider::OAuthProvider;
use crate::services::auth::oauth_state::OAuthStateService;
use crate::services::users::user_service::ACCOUNT_DISABLED;

pub struct OAuthLoginService {
    /// 자격 증명이 설정되지 않은 환경에서는 None
    provider: Option<Arc<dyn OAuthProvider>>,
    user_repo: Arc<dyn UserRepository>,
    state: OAuthStateService,
}

impl OAuthLoginService {
    pub fn new(
        provider: Option<Arc<dyn OAuthProvider>>,
        user_repo: Arc<dyn UserRepository>,
        state: OAuthStateService,
    ) -> Self {
        Self {
            provider,
            user_repo,
            state,
        }
    }

    fn provider(&self) -> AppResult<&Arc<dyn OAuthProvider>> {
        self.provider
            .as_ref()
            .ok_or_else(|| AppError::InternalError("OAuth 프로바이더가 설정되지 않았습니다".to_string()))
    }

    pub fn authorization_url(&self) -> AppResult<OAuthAuthorizationUrlResponse> {
        let provider = self.provider()?;
        let state = self.state.issue()?;

        Ok(OAuthAuthorizationUrlResponse {
            authorization_url: provider.authorization_url(&state),
            state,
        })
    }

    /// 콜백을 처리하고 `(사용자, 신규 가입 여부)`를 반환합니다.
    pub async fn login(&self, code: &str, state: &str) -> AppResult<(User, bool)> {
        let provider = self.provider()?;

        self.state.verify(state)?;

        let access_token = provider.exchange_code_for_token(code).await?;
        let info = provider.fetch_user_info(&access_token).await?;

        let (user, is_new_user) = match self
            .user_repo
            .find_by_oauth(info.provider, &info.provider_id)
            .await?
        {
            Some(user) => (user, false),
            None => match self.user_repo.find_by_email(&info.email).await? {
                Some(mut existing) => {
                    log::info!(
                        "기존 계정에 {} 연결: {}",
                        info.provider.as_str(),
                        existing.id
                    );
                    existing.link_oauth(&info);
                    (self.user_repo.update(existing).await?, false)
                }
                None => {
                    let created = self.user_repo.create(User::new_oauth(&info)).await?;
                    log::info!(
                        "✅ {} 신규 가입: {} ({})",
                        info.provider.as_str(),
                        created.email,
                        created.id
                    );
                    (created, true)
                }
            },
        };

        if !user.can_login() {
            log::warn!("비활성 계정 OAuth 로그인 시도: {}", user.id);
            return Err(AppError::AuthenticationError(ACCOUNT_DISABLED.to_string()));
        }

        Ok((user, is_new_user))
    }
}
