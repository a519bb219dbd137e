//! # Service Registry
//!
//! 애플리케이션 시작 시 인프라 컴포넌트(MongoDB, Redis)로부터 리포지토리와 서비스를
//! 한 번 조립하고, actix-web의 `app_data`로 핸들러에 공유합니다.
//!
//! ```text
//! Database ─┬─ MongoUserRepository (+ RedisClient) ─┬─ UserService
//!           │                                       └─ OAuthLoginService ── GoogleOAuthClient
//!           └─ MongoContentRepository ─────────────── ContentService
//!                                                     TokenService
//! ```
//!
//! 핸들러는 `web::Data<UserService>`처럼 필요한 서비스만 추출해서 사용합니다.
//! 테스트에서는 [`ServiceRegistry::new`]에 인메모리 리포지토리를 넘겨 같은 구성을 만듭니다.

use std::sync::Arc;

use actix_web::web;

use crate::caching::redis::RedisClient;
use crate::config::PasswordConfig;
use crate::db::Database;
use crate::errors::errors::AppResult;
use crate::repositories::contents::{ContentRepository, MongoContentRepository};
use crate::repositories::users::{MongoUserRepository, UserRepository};
use crate::services::auth::{
    GoogleOAuthClient, OAuthLoginService, OAuthProvider, OAuthStateService, TokenService,
};
use crate::services::contents::ContentService;
use crate::services::users::UserService;
use crate::utils::display_terminal::{print_final_summary, print_sub_task};

/// 등록되는 리포지토리 수 (users, contents)
const REPOSITORY_COUNT: usize = 2;
/// 등록되는 서비스 수
const SERVICE_COUNT: usize = 4;

/// 조립된 서비스 묶음
#[derive(Clone)]
pub struct ServiceRegistry {
    pub token_service: Arc<TokenService>,
    pub user_service: Arc<UserService>,
    pub oauth_login_service: Arc<OAuthLoginService>,
    pub content_service: Arc<ContentService>,
}

impl ServiceRegistry {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        content_repo: Arc<dyn ContentRepository>,
        oauth_provider: Option<Arc<dyn OAuthProvider>>,
        token_service: TokenService,
        oauth_state: OAuthStateService,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            token_service: Arc::new(token_service),
            user_service: Arc::new(UserService::new(user_repo.clone(), bcrypt_cost)),
            oauth_login_service: Arc::new(OAuthLoginService::new(
                oauth_provider,
                user_repo,
                oauth_state,
            )),
            content_service: Arc::new(ContentService::new(content_repo)),
        }
    }

    /// 환경 설정과 연결된 데이터 스토어로 운영용 레지스트리를 구성합니다.
    ///
    /// 인덱스를 생성하고, Google 자격 증명이 없으면 OAuth 없이 시작합니다.
    pub async fn initialize(database: &Database, redis: RedisClient) -> AppResult<Self> {
        let user_repo = MongoUserRepository::new(database, Some(redis));
        user_repo.create_indexes().await?;
        print_sub_task("MongoUserRepository", "OK");

        let content_repo = MongoContentRepository::new(database);
        content_repo.create_indexes().await?;
        print_sub_task("MongoContentRepository", "OK");

        let oauth_provider: Option<Arc<dyn OAuthProvider>> = match GoogleOAuthClient::from_config() {
            Ok(client) => {
                print_sub_task("GoogleOAuthClient", "OK");
                Some(Arc::new(client))
            }
            Err(e) => {
                log::warn!("⚠️ Google OAuth 비활성화: {}", e);
                print_sub_task("GoogleOAuthClient", "DISABLED");
                None
            }
        };

        let registry = Self::new(
            Arc::new(user_repo),
            Arc::new(content_repo),
            oauth_provider,
            TokenService::from_config(),
            OAuthStateService::from_config(),
            PasswordConfig::bcrypt_cost(),
        );

        print_final_summary(REPOSITORY_COUNT, SERVICE_COUNT);
        Ok(registry)
    }

    /// 각 서비스를 `web::Data`로 등록합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.token_service.clone()))
            .app_data(web::Data::from(self.user_service.clone()))
            .app_data(web::Data::from(self.oauth_login_service.clone()))
            .app_data(web::Data::from(self.content_service.clone()));
    }
}
